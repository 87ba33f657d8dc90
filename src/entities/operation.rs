//! Sewing operation - standard minutes, labor rate and line efficiency

use serde::{Deserialize, Serialize};

use crate::core::entity::{next_id, Entity};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::numeric::{Amount, Efficiency};

/// One operation in the garment's routing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier
    pub id: EntityId,

    /// Operation name (e.g. "Attach neck rib")
    #[serde(default)]
    pub name: String,

    /// Standard minute value: expected minutes per garment
    #[serde(default)]
    pub smv: Amount,

    /// Labor rate per hour
    #[serde(default)]
    pub rate_per_hour: Amount,

    /// Line efficiency as entered (0.85 = 85%)
    #[serde(default)]
    pub efficiency: Efficiency,
}

impl Entity for Operation {
    const PREFIX: EntityPrefix = EntityPrefix::Op;
    const KIND: &'static str = "operation";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Operation {
    pub fn new(
        name: impl Into<String>,
        smv: impl Into<Amount>,
        rate_per_hour: impl Into<Amount>,
        efficiency: impl Into<Efficiency>,
    ) -> Self {
        Self {
            id: next_id::<Self>(),
            name: name.into(),
            smv: smv.into(),
            rate_per_hour: rate_per_hour.into(),
            efficiency: efficiency.into(),
        }
    }

    /// Labor cost of this operation per garment.
    ///
    /// `(smv / 60) * rate / effective_efficiency`; the effective efficiency is
    /// at least 0.5 so the division is always defined.
    pub fn cost(&self) -> f64 {
        (self.smv.get() / 60.0) * self.rate_per_hour.get() / self.efficiency.effective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_cost() {
        let op = Operation::new("Hem", 6.0, 2.0, 1.0);
        assert!((op.cost() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_low_efficiency_doubles_cost_at_most() {
        let full = Operation::new("Hem", 6.0, 2.0, 1.0);
        let slow = Operation::new("Hem", 6.0, 2.0, 0.1);
        assert!((slow.cost() - 2.0 * full.cost()).abs() < 1e-9);
    }

    #[test]
    fn test_missing_efficiency_is_floored() {
        let op: Operation = serde_yml::from_str("id: OP-7\nsmv: 6\nrate_per_hour: 2\n").unwrap();
        assert_eq!(op.efficiency.effective(), 0.5);
        assert!((op.cost() - 0.4).abs() < 1e-9);
    }
}
