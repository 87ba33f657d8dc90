//! Validated numeric inputs
//!
//! Costing forms are edited interactively and are often half filled. Raw
//! values are coerced exactly once, when they enter a record, so the
//! calculators only ever see finite numbers:
//!
//! - [`Amount`] - a finite, non-negative quantity. Missing, non-numeric,
//!   non-finite or negative input becomes `0`.
//! - [`Efficiency`] - the operator efficiency exactly as entered (finite),
//!   with [`Efficiency::effective`] applying the `[0.5, 1.0]` clamp used by
//!   labor costing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Lower bound applied to operator efficiency in labor costing
pub const MIN_EFFICIENCY: f64 = 0.5;

/// Upper bound applied to operator efficiency in labor costing
pub const MAX_EFFICIENCY: f64 = 1.0;

/// Any scalar a data file may put in a numeric field
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl LooseNumber {
    fn to_f64(&self) -> Option<f64> {
        match self {
            LooseNumber::Number(n) => Some(*n),
            LooseNumber::Text(s) => parse_loose(s),
            LooseNumber::Other(_) => None,
        }
    }
}

/// Parse user text as a number; blank or garbage yields `None`
fn parse_loose(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// A finite, non-negative quantity (consumption, price, rate, amount...)
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Coerce a raw value: anything non-finite or negative becomes zero
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Amount(value)
        } else {
            Amount::ZERO
        }
    }

    /// Coerce an optional raw value, treating `None` as zero
    pub fn from_option(value: Option<f64>) -> Self {
        value.map(Amount::new).unwrap_or_default()
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Amount::from_option(parse_loose(s)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = LooseNumber::deserialize(deserializer)?;
        Ok(Amount::from_option(raw.to_f64()))
    }
}

/// Operator efficiency as entered, nominally in `(0, 1]`
///
/// Non-finite and non-numeric input is stored as `0`, which
/// [`Efficiency::effective`] then floors to [`MIN_EFFICIENCY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Efficiency(f64);

impl Efficiency {
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Efficiency(value)
        } else {
            Efficiency(0.0)
        }
    }

    pub fn from_option(value: Option<f64>) -> Self {
        value.map(Efficiency::new).unwrap_or_default()
    }

    /// The value as entered
    pub fn raw(self) -> f64 {
        self.0
    }

    /// The efficiency labor costing divides by.
    ///
    /// Values `<= 0` are replaced by [`MIN_EFFICIENCY`], then the result is
    /// clamped to `[MIN_EFFICIENCY, MAX_EFFICIENCY]`, so it is never below 0.5.
    pub fn effective(self) -> f64 {
        if self.0 <= 0.0 {
            return MIN_EFFICIENCY;
        }
        self.0.clamp(MIN_EFFICIENCY, MAX_EFFICIENCY)
    }
}

impl From<f64> for Efficiency {
    fn from(value: f64) -> Self {
        Efficiency::new(value)
    }
}

impl FromStr for Efficiency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Efficiency::from_option(parse_loose(s)))
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Efficiency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Efficiency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = LooseNumber::deserialize(deserializer)?;
        Ok(Efficiency::from_option(raw.to_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default)]
        amount: Amount,
        #[serde(default)]
        efficiency: Efficiency,
    }

    fn row(yaml: &str) -> Row {
        serde_yml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_amount_coerces_bad_values_to_zero() {
        assert_eq!(Amount::new(f64::NAN), Amount::ZERO);
        assert_eq!(Amount::new(f64::INFINITY), Amount::ZERO);
        assert_eq!(Amount::new(-3.0), Amount::ZERO);
        assert_eq!(Amount::new(2.5).get(), 2.5);
    }

    #[test]
    fn test_amount_from_text() {
        assert_eq!("3.2".parse::<Amount>().unwrap().get(), 3.2);
        assert_eq!(" 7 ".parse::<Amount>().unwrap().get(), 7.0);
        assert_eq!("".parse::<Amount>().unwrap(), Amount::ZERO);
        assert_eq!("abc".parse::<Amount>().unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_amount_deserialize_loose_inputs() {
        assert_eq!(row("amount: 2").amount.get(), 2.0);
        assert_eq!(row("amount: 0.95").amount.get(), 0.95);
        assert_eq!(row("amount: \"1.5\"").amount.get(), 1.5);
        assert_eq!(row("amount: lots").amount, Amount::ZERO);
        assert_eq!(row("amount: ~").amount, Amount::ZERO);
        assert_eq!(row("amount: [1, 2]").amount, Amount::ZERO);
        assert_eq!(row("efficiency: 0.85").amount, Amount::ZERO);
    }

    #[test]
    fn test_efficiency_effective_clamp() {
        assert_eq!(Efficiency::new(1.0).effective(), 1.0);
        assert_eq!(Efficiency::new(0.85).effective(), 0.85);
        assert_eq!(Efficiency::new(1.5).effective(), 1.0);
        assert_eq!(Efficiency::new(0.2).effective(), 0.5);
        assert_eq!(Efficiency::new(0.0).effective(), 0.5);
        assert_eq!(Efficiency::new(-1.0).effective(), 0.5);
        assert_eq!(Efficiency::new(f64::NAN).effective(), 0.5);
        assert_eq!(Efficiency::new(f64::NEG_INFINITY).effective(), 0.5);
    }

    #[test]
    fn test_efficiency_keeps_raw_value() {
        assert_eq!(Efficiency::new(1.5).raw(), 1.5);
        assert_eq!(row("efficiency: fast").efficiency.raw(), 0.0);
        assert_eq!(row("amount: 1").efficiency.effective(), 0.5);
    }
}
