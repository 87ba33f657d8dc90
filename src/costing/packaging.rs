//! Packaging cost

use crate::entities::packaging::PackagingLine;

/// Sum of flat per-garment packaging amounts
pub fn packaging_cost(lines: &[PackagingLine]) -> f64 {
    lines
        .iter()
        .fold(0.0, |sum, line| sum + line.per_unit_amount.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_packaging_costs_nothing() {
        assert_eq!(packaging_cost(&[]), 0.0);
    }

    #[test]
    fn test_polybag_and_carton() {
        let lines = [
            PackagingLine::new("Polybag", 0.05),
            PackagingLine::new("Carton alloc", 0.12),
        ];
        assert!((packaging_cost(&lines) - 0.17).abs() < 1e-9);
    }

    #[test]
    fn test_missing_amount_is_zero() {
        let line: PackagingLine = serde_yml::from_str("id: PK-3\nitem: Hangtag\n").unwrap();
        assert_eq!(packaging_cost(&[line, PackagingLine::new("Sticker", 0.01)]), 0.01);
    }
}
