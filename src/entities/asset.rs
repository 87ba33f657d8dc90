//! Browzwear 3D garment assets linked to a style

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Garment id from VStitcher
    pub id: EntityId,

    pub name: String,

    /// Number of materials in the 3D garment
    #[serde(default)]
    pub materials: u32,

    #[serde(default)]
    pub trims: u32,

    /// Date of the last simulation (YYYY-MM-DD)
    #[serde(default)]
    pub last_sim: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
