//! Labor cost - standard minutes at an hourly rate, adjusted for efficiency

use crate::entities::operation::Operation;

/// Sum of `(smv / 60) * rate_per_hour / effective_efficiency` over all operations
pub fn labor_cost(operations: &[Operation]) -> f64 {
    operations.iter().fold(0.0, |sum, op| sum + op.cost())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numeric::Efficiency;

    fn single(efficiency: impl Into<Efficiency>) -> f64 {
        labor_cost(&[Operation::new("Hem", 6.0, 2.0, efficiency)])
    }

    #[test]
    fn test_empty_routing_costs_nothing() {
        assert_eq!(labor_cost(&[]), 0.0);
    }

    #[test]
    fn test_six_minutes_at_two_per_hour() {
        assert!((single(1.0) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_floor() {
        let floor = single(0.5);
        assert_eq!(single(0.0), floor);
        assert_eq!(single(-0.3), floor);
        assert_eq!(single(f64::NAN), floor);
        assert_eq!(single("fast".parse::<Efficiency>().unwrap()), floor);
        assert!((floor - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_ceiling() {
        assert_eq!(single(1.5), single(1.0));
    }

    #[test]
    fn test_routing_is_summed() {
        let ops = [
            Operation::new("Join shoulders", 0.6, 2.2, 0.85),
            Operation::new("Attach neck rib", 1.1, 2.2, 0.85),
            Operation::new("Close sides", 0.9, 2.2, 0.85),
            Operation::new("Hem", 0.8, 2.2, 0.85),
        ];
        let expected = 3.4 / 60.0 * 2.2 / 0.85;
        assert!((labor_cost(&ops) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_smv_or_rate_is_zero() {
        let ops = [
            Operation::new("No SMV", f64::NAN, 2.0, 1.0),
            Operation::new("No rate", 6.0, -1.0, 1.0),
        ];
        assert_eq!(labor_cost(&ops), 0.0);
    }
}
