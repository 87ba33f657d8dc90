//! Cost aggregation - CMT and FOB per garment

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::bom::BomLine;
use crate::entities::operation::Operation;
use crate::entities::overhead::OverheadConfig;
use crate::entities::packaging::PackagingLine;

use super::{labor_cost, material_cost, overhead_cost, packaging_cost};

/// Per-garment cost breakdown, derived from the current inputs and never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material: f64,
    pub labor: f64,
    pub overhead: f64,
    pub packaging: f64,
    /// Cut-make-trim: labor + overhead
    pub cmt: f64,
    /// Free on board, excluding freight: material + packaging + cmt
    pub fob: f64,
}

impl CostBreakdown {
    /// Labelled rows in display order
    pub fn rows(&self) -> [(&'static str, f64); 6] {
        [
            ("Material", self.material),
            ("Labor", self.labor),
            ("Overhead", self.overhead),
            ("Packaging", self.packaging),
            ("CMT", self.cmt),
            ("FOB (no freight)", self.fob),
        ]
    }
}

/// Run every calculator over one snapshot of the inputs.
///
/// Pure and infallible: malformed numbers were already coerced when the
/// records were built.
pub fn compute_costing(
    bom: &[BomLine],
    operations: &[Operation],
    overhead: &OverheadConfig,
    packaging: &[PackagingLine],
) -> CostBreakdown {
    let material = material_cost(bom);
    let labor = labor_cost(operations);
    let overhead = overhead_cost(labor, overhead);
    let packaging = packaging_cost(packaging);
    let cmt = labor + overhead;
    let fob = material + packaging + cmt;

    debug!(
        bom_lines = bom.len(),
        operations = operations.len(),
        material,
        labor,
        overhead,
        packaging,
        fob,
        "recomputed costing"
    );

    CostBreakdown {
        material,
        labor,
        overhead,
        packaging,
        cmt,
        fob,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn worked_example() -> CostBreakdown {
        compute_costing(
            &[BomLine::new("Fabric", "Jersey").with_costing(1.0, 0.0, 2.0)],
            &[Operation::new("Hem", 6.0, 2.0, 1.0)],
            &OverheadConfig::labor_percent(0.5),
            &[PackagingLine::new("Polybag", 0.1)],
        )
    }

    #[test]
    fn test_worked_example() {
        let c = worked_example();
        assert!((c.material - 2.0).abs() < TOL);
        assert!((c.labor - 0.2).abs() < TOL);
        assert!((c.overhead - 0.1).abs() < TOL);
        assert!((c.packaging - 0.1).abs() < TOL);
        assert!((c.cmt - 0.3).abs() < TOL);
        assert!((c.fob - 2.4).abs() < TOL);
    }

    #[test]
    fn test_identities_hold() {
        let cases = [
            worked_example(),
            compute_costing(&[], &[], &OverheadConfig::per_unit(0.15), &[]),
            compute_costing(
                &[BomLine::new("Fabric", "Jersey").with_costing(0.95, 5.0, 3.2)],
                &[Operation::new("Hem", 0.8, 2.2, 0.85)],
                &OverheadConfig::labor_percent(0.3),
                &[PackagingLine::new("Polybag", 0.05)],
            ),
        ];
        for c in cases {
            assert!((c.cmt - (c.labor + c.overhead)).abs() < TOL);
            assert!((c.fob - (c.material + c.packaging + c.cmt)).abs() < TOL);
        }
    }

    #[test]
    fn test_recomputation_is_bit_identical() {
        let bom = [BomLine::new("Fabric", "Jersey").with_costing(0.95, 5.0, 3.2)];
        let ops = [Operation::new("Hem", 0.8, 2.2, 0.85)];
        let oh = OverheadConfig::labor_percent(0.3);
        let pack = [PackagingLine::new("Polybag", 0.05)];

        let first = compute_costing(&bom, &ops, &oh, &pack);
        let second = compute_costing(&bom, &ops, &oh, &pack);
        assert_eq!(first, second);
        assert_eq!(first.fob.to_bits(), second.fob.to_bits());
    }

    #[test]
    fn test_empty_inputs_give_zero_breakdown() {
        let c = compute_costing(&[], &[], &OverheadConfig::default(), &[]);
        assert_eq!(c, CostBreakdown::default());
        assert!(c.rows().iter().all(|(_, v)| *v == 0.0 && v.is_sign_positive()));
    }

    #[test]
    fn test_per_unit_overhead_flows_into_cmt() {
        let c = compute_costing(
            &[],
            &[Operation::new("Hem", 6.0, 2.0, 1.0)],
            &OverheadConfig::per_unit(0.15),
            &[],
        );
        assert!((c.cmt - 0.35).abs() < TOL);
        assert!((c.fob - 0.35).abs() < TOL);
    }

    #[test]
    fn test_all_components_non_negative() {
        let c = compute_costing(
            &[BomLine::new("Fabric", "Bad").with_costing(-1.0, -50.0, 3.0)],
            &[Operation::new("Bad", -6.0, 2.0, -1.0)],
            &OverheadConfig::labor_percent(-0.3),
            &[PackagingLine::new("Bad", -0.1)],
        );
        assert!(c.rows().iter().all(|(_, v)| *v >= 0.0));
    }
}
