//! Textile costing engine
//!
//! Four independent calculators and one aggregator, all pure functions over
//! already-validated records:
//!
//! - [`material_cost`] - BOM consumption with waste
//! - [`labor_cost`] - SMV x rate / effective efficiency
//! - [`overhead_cost`] - percentage of labor or flat per unit
//! - [`packaging_cost`] - flat per-unit packaging
//! - [`compute_costing`] - CMT = labor + overhead, FOB = material + packaging + CMT
//!
//! Marker utilization ([`marker_utilization`]) is independent of the cost
//! chain, and [`quote_variance`] compares vendor quotes with the result.

mod breakdown;
mod labor;
mod marker;
mod material;
mod overhead;
mod packaging;
mod variance;

pub use breakdown::{compute_costing, CostBreakdown};
pub use labor::labor_cost;
pub use marker::{
    efficiency_percent, end_loss_percent, marker_utilization, MarkerError, MarkerUtilization,
};
pub use material::material_cost;
pub use overhead::overhead_cost;
pub use packaging::packaging_cost;
pub use variance::{quote_variance, QuoteVariance};
