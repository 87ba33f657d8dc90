//! Record types of a style dossier
//!
//! **Costing inputs:**
//! - [`BomLine`] - fabric and trim consumption with waste and unit price
//! - [`Operation`] - sewing operations (SMV, rate, efficiency)
//! - [`OverheadConfig`] - overhead as a share of labor or a flat amount
//! - [`PackagingLine`] - flat per-garment packaging
//! - [`MarkerConfig`] - cutting marker dimensions
//!
//! **Style context:**
//! - [`Style`] - stage, gates, milestones, risks
//! - [`Specs`], [`Asset`], [`Decision`], [`Rfq`], [`Quote`], [`Changes`], [`Validation`]
//!
//! [`StyleDossier`] holds all of them for one style.

pub mod asset;
pub mod bom;
pub mod change;
pub mod decision;
pub mod defaults;
pub mod dossier;
pub mod marker;
pub mod operation;
pub mod overhead;
pub mod packaging;
pub mod sourcing;
pub mod specs;
pub mod style;
pub mod validation;

pub use asset::Asset;
pub use bom::BomLine;
pub use change::{ChangeRecord, Changes};
pub use decision::Decision;
pub use dossier::{DossierError, StyleDossier};
pub use marker::MarkerConfig;
pub use operation::Operation;
pub use overhead::{OverheadBasis, OverheadConfig};
pub use packaging::PackagingLine;
pub use sourcing::{Quote, Rfq};
pub use specs::{PointOfMeasure, Specs, TestMethod};
pub use style::{Gate, KpiSeries, Milestone, Stage, Style};
pub use validation::{LabResult, Sample, Validation, Verdict};
