//! Marker utilization - how much of the marker the garment pieces use

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::marker::MarkerConfig;

/// Derived marker percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerUtilization {
    /// garment area / (width x length) x 100
    pub efficiency_percent: f64,
    /// end loss / length x 100
    pub end_loss_percent: f64,
}

/// A marker dimension that would make a percentage undefined
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker width must be greater than zero")]
    ZeroWidth,

    #[error("marker length must be greater than zero")]
    ZeroLength,
}

/// Marker efficiency in percent. Zero width or length is rejected.
pub fn efficiency_percent(marker: &MarkerConfig) -> Result<f64, MarkerError> {
    if marker.marker_width.get() == 0.0 {
        return Err(MarkerError::ZeroWidth);
    }
    if marker.marker_length.get() == 0.0 {
        return Err(MarkerError::ZeroLength);
    }
    Ok(marker.garment_area.get() / marker.area() * 100.0)
}

/// End loss as a percentage of marker length. Zero length is rejected.
pub fn end_loss_percent(marker: &MarkerConfig) -> Result<f64, MarkerError> {
    if marker.marker_length.get() == 0.0 {
        return Err(MarkerError::ZeroLength);
    }
    Ok(marker.end_loss.get() / marker.marker_length.get() * 100.0)
}

/// Both marker percentages
pub fn marker_utilization(marker: &MarkerConfig) -> Result<MarkerUtilization, MarkerError> {
    Ok(MarkerUtilization {
        efficiency_percent: efficiency_percent(marker)?,
        end_loss_percent: end_loss_percent(marker)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_tee_marker() {
        let marker = MarkerConfig::new(150.0, 1200.0, 30000.0, 5.0);
        let u = marker_utilization(&marker).unwrap();
        assert!((u.efficiency_percent - 16.666_666_666).abs() < 1e-6);
        assert!((u.end_loss_percent - 0.416_666_666).abs() < 1e-6);
    }

    #[test]
    fn test_zero_width_rejected() {
        let marker = MarkerConfig::new(0.0, 1200.0, 30000.0, 5.0);
        assert_eq!(efficiency_percent(&marker), Err(MarkerError::ZeroWidth));
        // end loss only depends on length
        assert!(end_loss_percent(&marker).is_ok());
        assert_eq!(marker_utilization(&marker), Err(MarkerError::ZeroWidth));
    }

    #[test]
    fn test_zero_length_rejected() {
        let marker = MarkerConfig::new(150.0, 0.0, 30000.0, 5.0);
        assert_eq!(efficiency_percent(&marker), Err(MarkerError::ZeroLength));
        assert_eq!(end_loss_percent(&marker), Err(MarkerError::ZeroLength));
    }

    #[test]
    fn test_negative_dimension_coerced_then_rejected() {
        let marker = MarkerConfig::new(-150.0, 1200.0, 30000.0, 5.0);
        assert_eq!(marker_utilization(&marker), Err(MarkerError::ZeroWidth));
    }

    #[test]
    fn test_empty_garment_area_is_zero_percent() {
        let marker = MarkerConfig::new(150.0, 1200.0, 0.0, 0.0);
        let u = marker_utilization(&marker).unwrap();
        assert_eq!(u.efficiency_percent, 0.0);
        assert_eq!(u.end_loss_percent, 0.0);
    }
}
