//! Packaging line - flat per-garment packaging cost

use serde::{Deserialize, Serialize};

use crate::core::entity::{next_id, Entity};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::numeric::Amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingLine {
    pub id: EntityId,

    /// Item name (Polybag, Carton alloc, ...)
    #[serde(default)]
    pub item: String,

    /// Cost per garment
    #[serde(default)]
    pub per_unit_amount: Amount,
}

impl Entity for PackagingLine {
    const PREFIX: EntityPrefix = EntityPrefix::Pk;
    const KIND: &'static str = "packaging line";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.item
    }
}

impl PackagingLine {
    pub fn new(item: impl Into<String>, per_unit_amount: impl Into<Amount>) -> Self {
        Self {
            id: next_id::<Self>(),
            item: item.into(),
            per_unit_amount: per_unit_amount.into(),
        }
    }
}
