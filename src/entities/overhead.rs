//! Overhead configuration - percentage of labor or a flat amount per unit

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::core::numeric::Amount;

/// How overhead is derived
///
/// Any label other than `per_unit` selects [`OverheadBasis::LaborPercent`].
/// This is the one place that fallback lives; calculators only ever see a
/// resolved basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverheadBasis {
    /// `labor * rate_percent`
    #[default]
    LaborPercent,
    /// Flat `per_unit_amount` per garment
    PerUnit,
}

impl OverheadBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverheadBasis::LaborPercent => "labor_percent",
            OverheadBasis::PerUnit => "per_unit",
        }
    }

    /// Resolve a basis label, falling back to labor percent
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().replace('-', "_").as_str() {
            "per_unit" => OverheadBasis::PerUnit,
            _ => OverheadBasis::LaborPercent,
        }
    }
}

impl fmt::Display for OverheadBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OverheadBasis {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OverheadBasis::from_label(s))
    }
}

impl Serialize for OverheadBasis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OverheadBasis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Label {
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Label::deserialize(deserializer)? {
            Label::Text(s) => OverheadBasis::from_label(&s),
            Label::Other(_) => OverheadBasis::default(),
        })
    }
}

/// Overhead settings for a style
///
/// Both amounts are kept regardless of basis so switching back and forth
/// does not lose what was entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverheadConfig {
    #[serde(default)]
    pub basis: OverheadBasis,

    /// Fraction of labor cost (0.3 = 30%), used with `labor_percent`
    #[serde(default)]
    pub rate_percent: Amount,

    /// Flat amount per garment, used with `per_unit`
    #[serde(default)]
    pub per_unit_amount: Amount,
}

impl OverheadConfig {
    pub fn labor_percent(rate_percent: impl Into<Amount>) -> Self {
        Self {
            basis: OverheadBasis::LaborPercent,
            rate_percent: rate_percent.into(),
            per_unit_amount: Amount::ZERO,
        }
    }

    pub fn per_unit(per_unit_amount: impl Into<Amount>) -> Self {
        Self {
            basis: OverheadBasis::PerUnit,
            rate_percent: Amount::ZERO,
            per_unit_amount: per_unit_amount.into(),
        }
    }
}
