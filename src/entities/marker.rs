//! Cutting marker dimensions

use serde::{Deserialize, Serialize};

use crate::core::numeric::Amount;

/// Marker layout inputs, all in consistent units (cm and cm²)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Usable fabric width
    #[serde(default)]
    pub marker_width: Amount,

    /// Marker length along the lay
    #[serde(default)]
    pub marker_length: Amount,

    /// Total area of the garment pieces placed in the marker
    #[serde(default)]
    pub garment_area: Amount,

    /// Unusable length at the marker ends
    #[serde(default)]
    pub end_loss: Amount,
}

impl MarkerConfig {
    pub fn new(
        marker_width: impl Into<Amount>,
        marker_length: impl Into<Amount>,
        garment_area: impl Into<Amount>,
        end_loss: impl Into<Amount>,
    ) -> Self {
        Self {
            marker_width: marker_width.into(),
            marker_length: marker_length.into(),
            garment_area: garment_area.into(),
            end_loss: end_loss.into(),
        }
    }

    /// Marker area (width x length)
    pub fn area(&self) -> f64 {
        self.marker_width.get() * self.marker_length.get()
    }
}
