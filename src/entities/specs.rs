//! Garment specs - points of measure and fabric test methods

use serde::{Deserialize, Serialize};

use crate::core::numeric::Amount;

/// A point of measure on the size spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfMeasure {
    /// Short code on the tech pack (A, B, C...)
    pub code: String,

    /// Where the measurement is taken
    pub point: String,

    /// Base-size measurement
    #[serde(default)]
    pub base: Amount,

    /// Tolerance as written (e.g. "+/- 1.0")
    #[serde(default)]
    pub tolerance: String,
}

/// A fabric or garment test the style must pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMethod {
    pub name: String,

    /// Standard reference (ASTM D5430, AATCC 135...)
    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub limit: String,

    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    #[serde(default)]
    pub pom: Vec<PointOfMeasure>,

    #[serde(default)]
    pub tests: Vec<TestMethod>,
}
