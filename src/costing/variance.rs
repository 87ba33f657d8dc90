//! Quote variance - vendor quotes against the computed cost

use serde::Serialize;

use crate::entities::sourcing::Quote;

use super::CostBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteVariance {
    /// Quoted FOB minus computed FOB
    pub fob_delta: f64,
    /// Quoted CMT minus computed CMT
    pub cmt_delta: f64,
    /// FOB delta relative to computed FOB; `None` when nothing is costed yet
    pub fob_delta_percent: Option<f64>,
}

/// Compare one quote to the computed breakdown
pub fn quote_variance(quote: &Quote, costing: &CostBreakdown) -> QuoteVariance {
    let fob_delta = quote.fob.get() - costing.fob;
    let cmt_delta = quote.cmt.get() - costing.cmt;
    let fob_delta_percent = if costing.fob > 0.0 {
        Some(fob_delta / costing.fob * 100.0)
    } else {
        None
    };

    QuoteVariance {
        fob_delta,
        cmt_delta,
        fob_delta_percent,
    }
}
