//! Built-in sample style (SS25 Crew Tee)
//!
//! Served whenever no project data is available, and used by
//! `plm init --sample` to seed a workspace.

use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::numeric::{Amount, Efficiency};

use super::asset::Asset;
use super::bom::BomLine;
use super::change::{ChangeRecord, Changes};
use super::decision::Decision;
use super::dossier::StyleDossier;
use super::marker::MarkerConfig;
use super::operation::Operation;
use super::overhead::{OverheadBasis, OverheadConfig};
use super::packaging::PackagingLine;
use super::sourcing::{Quote, Rfq};
use super::specs::{PointOfMeasure, Specs, TestMethod};
use super::style::{Gate, KpiSeries, Milestone, Stage, Style};
use super::validation::{LabResult, Sample, Validation, Verdict};

/// Id of the built-in sample style
pub const SAMPLE_STYLE_ID: &str = "STYLE-SS25-TEECREW-001";

fn id(prefix: EntityPrefix, key: &str) -> EntityId {
    EntityId::fixed(prefix, key)
}

#[allow(clippy::too_many_arguments)]
fn bom_line(
    key: &str,
    kind: &str,
    description: &str,
    supplier: &str,
    uom: &str,
    consumption: f64,
    waste_percent: f64,
    unit_price: f64,
) -> BomLine {
    BomLine {
        id: id(EntityPrefix::Bom, key),
        level: 1,
        kind: kind.to_string(),
        description: description.to_string(),
        supplier: supplier.to_string(),
        unit_of_measure: uom.to_string(),
        consumption: Amount::new(consumption),
        waste_percent: Amount::new(waste_percent),
        unit_price: Amount::new(unit_price),
        currency: "USD".to_string(),
        effectivity: "All".to_string(),
    }
}

fn operation(key: &str, name: &str, smv: f64) -> Operation {
    Operation {
        id: id(EntityPrefix::Op, key),
        name: name.to_string(),
        smv: Amount::new(smv),
        rate_per_hour: Amount::new(2.2),
        efficiency: Efficiency::new(0.85),
    }
}

fn gate(label: &str, done: bool) -> Gate {
    Gate {
        label: label.to_string(),
        done,
    }
}

fn milestone(label: &str, date: &str, done: bool) -> Milestone {
    Milestone {
        label: label.to_string(),
        date: date.to_string(),
        done,
    }
}

fn sample_style() -> Style {
    Style {
        id: id(EntityPrefix::Style, "SS25-TEECREW-001"),
        title: "SS25 Crew Tee".to_string(),
        stage: Stage::Quote,
        manager: "Alex Buyer".to_string(),
        season: "SS25".to_string(),
        colorway: "Optic White".to_string(),
        risks: vec![
            "Fabric yield variance".to_string(),
            "Loop length drift".to_string(),
        ],
        gates: vec![
            gate("Business Case", true),
            gate("Definition Complete", true),
            gate("3D Fit Approved", true),
            gate("Cost Lock", false),
            gate("Industrialization Ready", false),
            gate("RTM", false),
        ],
        milestones: vec![
            milestone("Definition Complete", "2025-09-05", true),
            milestone("3D Fit Approved", "2025-09-10", true),
            milestone("Cost Lock", "2025-09-20", false),
            milestone("Industrialization Ready", "2025-10-05", false),
            milestone("RTM", "2025-10-12", false),
        ],
    }
}

/// The sample dossier. Its costing comes to an FOB of about 4.012.
pub fn sample_dossier() -> StyleDossier {
    let mut dossier = StyleDossier::new(sample_style());

    dossier.kpis = vec![KpiSeries {
        name: "ECR Cycle Days".to_string(),
        series: vec![9.0, 7.0, 6.0, 8.0, 5.0, 4.0, 5.0],
    }];

    dossier.bom = vec![
        bom_line("1", "Fabric", "Cotton Jersey 180gsm", "Mill A", "m", 0.95, 5.0, 3.2),
        bom_line("2", "Rib", "Rib Knit 2x2", "Mill B", "m", 0.15, 5.0, 2.4),
        bom_line("3", "Trim", "Neck Label", "TrimCo", "pcs", 1.0, 2.0, 0.08),
    ];

    dossier.operations = vec![
        operation("1", "Join shoulders", 0.6),
        operation("2", "Attach neck rib", 1.1),
        operation("3", "Close sides", 0.9),
        operation("4", "Hem", 0.8),
    ];

    dossier.overhead = OverheadConfig {
        basis: OverheadBasis::LaborPercent,
        rate_percent: Amount::new(0.3),
        per_unit_amount: Amount::new(0.15),
    };

    dossier.packaging = vec![
        PackagingLine {
            id: id(EntityPrefix::Pk, "1"),
            item: "Polybag".to_string(),
            per_unit_amount: Amount::new(0.05),
        },
        PackagingLine {
            id: id(EntityPrefix::Pk, "2"),
            item: "Carton alloc".to_string(),
            per_unit_amount: Amount::new(0.12),
        },
    ];

    dossier.marker = MarkerConfig::new(150.0, 1200.0, 30000.0, 5.0);

    dossier.specs = Specs {
        pom: vec![
            PointOfMeasure {
                code: "A".to_string(),
                point: "Chest 2.5cm below armhole".to_string(),
                base: Amount::new(52.0),
                tolerance: "+/- 1.0".to_string(),
            },
            PointOfMeasure {
                code: "B".to_string(),
                point: "Body length HPS".to_string(),
                base: Amount::new(70.0),
                tolerance: "+/- 1.0".to_string(),
            },
            PointOfMeasure {
                code: "C".to_string(),
                point: "Sleeve length from CB".to_string(),
                base: Amount::new(42.0),
                tolerance: "+/- 0.8".to_string(),
            },
        ],
        tests: vec![
            TestMethod {
                name: "4-point fabric".to_string(),
                method: "ASTM D5430".to_string(),
                limit: "<= 40/100m2".to_string(),
                status: "Pending".to_string(),
            },
            TestMethod {
                name: "Dimensional stability".to_string(),
                method: "AATCC 135".to_string(),
                limit: "-3%/+1%".to_string(),
                status: "Pending".to_string(),
            },
        ],
    };

    dossier.assets = vec![Asset {
        id: id(EntityPrefix::Bw, "1234"),
        name: "Crew Tee v5".to_string(),
        materials: 3,
        trims: 4,
        last_sim: "2025-09-05".to_string(),
        thumbnail: None,
    }];

    dossier.decisions = vec![Decision {
        id: id(EntityPrefix::D, "01"),
        title: "Choose jersey supplier".to_string(),
        problem: "Match handfeel at 180gsm, lowest cost/m.".to_string(),
        options: "Mill A / Mill C".to_string(),
        outcome: "Pick Mill A, lower shrinkage variance.".to_string(),
        owner: "Alex".to_string(),
        date: "2025-09-13".to_string(),
    }];

    dossier.rfqs = vec![Rfq {
        id: id(EntityPrefix::Rfq, "01"),
        vendors: 3,
        due: "2025-09-20".to_string(),
        status: "Open".to_string(),
    }];

    dossier.quotes = vec![Quote {
        id: id(EntityPrefix::Q, "01"),
        vendor: "Factory Z".to_string(),
        fob: Amount::new(3.75),
        cmt: Amount::new(1.1),
        lead_days: 28,
        notes: "Includes rib price break".to_string(),
    }];

    dossier.changes = Changes {
        ecr: vec![ChangeRecord {
            id: id(EntityPrefix::Ecr, "01"),
            title: "Neck drop +5mm".to_string(),
            state: "Under Review".to_string(),
            age_days: 2,
        }],
        eco: vec![ChangeRecord {
            id: id(EntityPrefix::Eco, "01"),
            title: "Swap neck label to woven".to_string(),
            state: "Open".to_string(),
            age_days: 1,
        }],
    };

    dossier.validation = Validation {
        samples: vec![Sample {
            id: id(EntityPrefix::Smp, "PP1"),
            kind: "PP".to_string(),
            status: "Submitted".to_string(),
            date: "2025-09-12".to_string(),
        }],
        lab: vec![LabResult {
            id: id(EntityPrefix::Lab, "01"),
            test: "4-point".to_string(),
            result: 22.0,
            verdict: Verdict::Pass,
        }],
    };

    dossier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_parseable() {
        let d = sample_dossier();
        assert_eq!(d.id().to_string(), SAMPLE_STYLE_ID);
        assert_eq!(EntityId::parse(SAMPLE_STYLE_ID).unwrap(), *d.id());
        for line in &d.bom {
            assert_eq!(EntityId::parse(&line.id.to_string()).unwrap(), line.id);
        }
    }

    #[test]
    fn test_sample_costing() {
        let c = sample_dossier().costing();
        let labor = 3.4 / 60.0 * 2.2 / 0.85;
        assert!((c.material - 3.6516).abs() < 1e-9);
        assert!((c.labor - labor).abs() < 1e-9);
        assert!((c.overhead - labor * 0.3).abs() < 1e-9);
        assert!((c.packaging - 0.17).abs() < 1e-9);
        assert!((c.fob - 4.012_266_667).abs() < 1e-6);
    }

    #[test]
    fn test_sample_marker() {
        let u = sample_dossier().marker_utilization().unwrap();
        assert!((u.efficiency_percent - 16.67).abs() < 0.01);
        assert!((u.end_loss_percent - 0.4167).abs() < 0.0001);
    }
}
