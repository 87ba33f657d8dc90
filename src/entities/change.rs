//! Engineering change requests and orders

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// An ECR or ECO; the id prefix tells which
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub id: EntityId,

    pub title: String,

    /// Workflow state as reported by the change system
    #[serde(default)]
    pub state: String,

    /// Days since the change was raised
    #[serde(default)]
    pub age_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    #[serde(default)]
    pub ecr: Vec<ChangeRecord>,

    #[serde(default)]
    pub eco: Vec<ChangeRecord>,
}

impl Changes {
    /// The oldest change across ECRs and ECOs, if any
    pub fn oldest(&self) -> Option<&ChangeRecord> {
        self.ecr.iter().chain(self.eco.iter()).max_by_key(|c| c.age_days)
    }
}
