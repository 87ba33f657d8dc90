//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::Config;

/// Parse a record id, accepting either `BOM-1` or just the key `1`
pub fn parse_record_id(prefix: EntityPrefix, raw: &str) -> miette::Result<EntityId> {
    let raw = raw.trim();
    match EntityId::parse(raw) {
        Ok(id) if id.prefix() == prefix => Ok(id),
        _ => EntityId::from_parts(prefix, raw)
            .map_err(|e| miette::miette!("invalid {} id '{}': {}", prefix, raw, e)),
    }
}

/// Number formatting taken from the effective configuration
#[derive(Debug, Clone)]
pub struct Money {
    pub symbol: String,
    pub precision: usize,
}

impl Money {
    pub fn from_config(config: &Config) -> Self {
        Self {
            symbol: config.currency_symbol().to_string(),
            precision: config.precision(),
        }
    }

    /// `$4.012`
    pub fn format(&self, value: f64) -> String {
        format!("{}{:.*}", self.symbol, self.precision, value)
    }

    /// Plain number without symbol, for machine-readable tables
    pub fn plain(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// Signed difference, e.g. `+$0.120` / `-$0.050`
    pub fn delta(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "+" };
        format!("{}{}{:.*}", sign, self.symbol, self.precision, value.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Percentage with two decimals, e.g. `16.67%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

const SPARK_TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a numeric series as a one-line sparkline
pub fn sparkline(series: &[f64]) -> String {
    let finite: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return String::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let top = (SPARK_TICKS.len() - 1) as f64;

    finite
        .iter()
        .map(|v| {
            let idx = (((v - min) / span) * top).round() as usize;
            SPARK_TICKS[idx.min(SPARK_TICKS.len() - 1)]
        })
        .collect()
}

/// `✓` or a dim `·` for checklist items
pub fn check_mark(done: bool) -> String {
    if done {
        console::style("✓").green().to_string()
    } else {
        console::style("·").dim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        let id = parse_record_id(EntityPrefix::Bom, "BOM-1").unwrap();
        assert_eq!(id.to_string(), "BOM-1");
        assert_eq!(parse_record_id(EntityPrefix::Bom, "2").unwrap().to_string(), "BOM-2");
        assert_eq!(parse_record_id(EntityPrefix::Op, "op-3").unwrap().to_string(), "OP-3");
        assert!(parse_record_id(EntityPrefix::Pk, "a b").is_err());
    }

    #[test]
    fn test_money_format() {
        let money = Money::default();
        assert_eq!(money.format(4.0122667), "$4.012");
        assert_eq!(money.plain(0.17), "0.170");
        assert_eq!(money.delta(-0.05), "-$0.050");
        assert_eq!(money.delta(0.12), "+$0.120");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(16.666_666), "16.67%");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Ärmelbündchen", 6), "Ärm...");
    }

    #[test]
    fn test_sparkline_range() {
        assert_eq!(sparkline(&[1.0, 8.0]), "▁█");
        assert_eq!(sparkline(&[12.0, 9.0, 7.0, 6.0, 5.0]).chars().count(), 5);
    }

    #[test]
    fn test_sparkline_flat_and_empty() {
        assert_eq!(sparkline(&[3.0, 3.0]), "▁▁");
        assert_eq!(sparkline(&[]), "");
        assert_eq!(sparkline(&[f64::NAN]), "");
    }
}
