//! Sourcing records - RFQs and normalized vendor quotes

use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::numeric::Amount;

/// A request for quotation sent to one or more vendors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rfq {
    pub id: EntityId,

    /// Number of vendors invited
    #[serde(default)]
    pub vendors: u32,

    /// Response due date (YYYY-MM-DD)
    #[serde(default)]
    pub due: String,

    #[serde(default)]
    pub status: String,
}

impl Entity for Rfq {
    const PREFIX: EntityPrefix = EntityPrefix::Rfq;
    const KIND: &'static str = "RFQ";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.status
    }
}

/// A vendor quote normalized to per-garment FOB and CMT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: EntityId,

    pub vendor: String,

    #[serde(default)]
    pub fob: Amount,

    #[serde(default)]
    pub cmt: Amount,

    /// Production lead time in days
    #[serde(default)]
    pub lead_days: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Entity for Quote {
    const PREFIX: EntityPrefix = EntityPrefix::Q;
    const KIND: &'static str = "quote";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.vendor
    }
}
