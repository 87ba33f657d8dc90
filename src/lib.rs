//! plm: apparel style costing toolkit
//!
//! Keeps apparel style dossiers (BOM, sewing operations, overhead,
//! packaging, marker, sourcing and validation records) as plain YAML files
//! and computes the per-garment cost breakdown from them.
//!
//! The costing engine lives in [`costing`] and is pure: every calculator
//! takes already-validated inputs and returns a number.

pub mod cli;
pub mod core;
pub mod costing;
pub mod entities;
pub mod logging;
pub mod yaml;
