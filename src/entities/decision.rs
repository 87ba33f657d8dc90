//! Decision log entry

use serde::{Deserialize, Serialize};

use crate::core::entity::{next_id, Entity};
use crate::core::identity::{EntityId, EntityPrefix};

/// A recorded product decision: the problem, options weighed and outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: EntityId,

    pub title: String,

    #[serde(default)]
    pub problem: String,

    #[serde(default)]
    pub options: String,

    #[serde(default)]
    pub outcome: String,

    #[serde(default)]
    pub owner: String,

    /// Decision date (YYYY-MM-DD)
    pub date: String,
}

impl Entity for Decision {
    const PREFIX: EntityPrefix = EntityPrefix::D;
    const KIND: &'static str = "decision";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Decision {
    /// Create a decision dated today
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: next_id::<Self>(),
            title: title.into(),
            problem: String::new(),
            options: String::new(),
            outcome: String::new(),
            owner: owner.into(),
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}
