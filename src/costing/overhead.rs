//! Overhead cost

use crate::core::numeric::Amount;
use crate::entities::overhead::{OverheadBasis, OverheadConfig};

/// Overhead for a given labor total.
///
/// `per_unit` returns the flat amount; `labor_percent` returns
/// `labor * rate_percent`. A negative or non-finite labor total counts as 0.
pub fn overhead_cost(labor: f64, config: &OverheadConfig) -> f64 {
    match config.basis {
        OverheadBasis::PerUnit => config.per_unit_amount.get(),
        OverheadBasis::LaborPercent => Amount::new(labor).get() * config.rate_percent.get(),
    }
}
