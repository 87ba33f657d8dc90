//! Bill-of-materials line - fabric, rib, trim and label consumption

use serde::{Deserialize, Serialize};

use crate::core::entity::{next_id, Entity};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::numeric::Amount;

/// One BOM line, costed per unit of output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    /// Unique identifier
    pub id: EntityId,

    /// Indent level in the BOM tree (1 = directly on the garment)
    #[serde(default = "default_level")]
    pub level: u32,

    /// Category label (Fabric, Rib, Trim, ...)
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub supplier: String,

    /// Unit of measure for consumption and price (m, pcs, ...)
    #[serde(default = "default_uom")]
    pub unit_of_measure: String,

    /// Quantity consumed per garment
    #[serde(default)]
    pub consumption: Amount,

    /// Waste allowance in percentage points (5 = 5%)
    #[serde(default)]
    pub waste_percent: Amount,

    /// Price per unit of measure
    #[serde(default)]
    pub unit_price: Amount,

    /// Currency code; amounts are summed nominally, never converted
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Which sizes/colorways the line applies to
    #[serde(default = "default_effectivity")]
    pub effectivity: String,
}

fn default_level() -> u32 {
    1
}

fn default_uom() -> String {
    "m".to_string()
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

fn default_effectivity() -> String {
    "All".to_string()
}

impl Entity for BomLine {
    const PREFIX: EntityPrefix = EntityPrefix::Bom;
    const KIND: &'static str = "BOM line";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.description
    }
}

impl BomLine {
    /// Create an empty line with a fresh id
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: next_id::<Self>(),
            level: default_level(),
            kind: kind.into(),
            description: description.into(),
            supplier: String::new(),
            unit_of_measure: default_uom(),
            consumption: Amount::ZERO,
            waste_percent: Amount::ZERO,
            unit_price: Amount::ZERO,
            currency: default_currency(),
            effectivity: default_effectivity(),
        }
    }

    /// Set consumption, waste and price in one go
    pub fn with_costing(
        mut self,
        consumption: impl Into<Amount>,
        waste_percent: impl Into<Amount>,
        unit_price: impl Into<Amount>,
    ) -> Self {
        self.consumption = consumption.into();
        self.waste_percent = waste_percent.into();
        self.unit_price = unit_price.into();
        self
    }

    /// Consumption inflated by the waste allowance
    pub fn gross_consumption(&self) -> f64 {
        self.consumption.get() * (1.0 + self.waste_percent.get() / 100.0)
    }

    /// Cost contribution of this line per garment
    pub fn cost(&self) -> f64 {
        self.gross_consumption() * self.unit_price.get()
    }
}
