//! `plm cost` command - Cost breakdown per garment

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{truncate_str, Money};
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::identity::EntityId;
use crate::costing::CostBreakdown;
use crate::entities::StyleDossier;

const LABEL_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 10;

#[derive(clap::Args, Debug)]
pub struct CostArgs {
    /// Also list the contribution of each BOM line and operation
    #[arg(long, short = 'd')]
    pub detail: bool,
}

#[derive(Serialize)]
struct CostView<'a> {
    style: &'a EntityId,
    #[serde(flatten)]
    breakdown: CostBreakdown,
}

pub fn run(args: CostArgs, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    let loaded = session.load()?;
    let dossier = &loaded.dossier;
    let breakdown = dossier.costing();
    let money = session.money();

    match session.format() {
        OutputFormat::Auto => {
            if loaded.origin.is_fallback() && !session.global.quiet {
                eprintln!(
                    "{} showing the sample style",
                    style("!").yellow()
                );
            }
            print!("{}", render_summary(dossier, &breakdown, &money));
            if args.detail {
                println!();
                print!("{}", detail_table(dossier, &money).render(OutputFormat::Auto)?);
            }
            Ok(())
        }
        format => {
            let view = CostView {
                style: dossier.id(),
                breakdown,
            };
            emit(format, &view, &breakdown_table(&breakdown, &money))
        }
    }
}

/// Human-readable breakdown, CMT and FOB below a rule
fn render_summary(dossier: &StyleDossier, breakdown: &CostBreakdown, money: &Money) -> String {
    let mut out = format!("{}  {}\n", dossier.id(), dossier.style.title);
    let rows = breakdown.rows();
    let (components, totals) = rows.split_at(4);

    for (label, value) in components {
        out.push_str(&summary_line(label, *value, money));
    }
    out.push_str(&"─".repeat(LABEL_WIDTH + VALUE_WIDTH));
    out.push('\n');
    for (label, value) in totals {
        out.push_str(&summary_line(label, *value, money));
    }
    out
}

fn summary_line(label: &str, value: f64, money: &Money) -> String {
    format!(
        "{:<lw$}{:>vw$}\n",
        label,
        money.format(value),
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    )
}

fn breakdown_table(breakdown: &CostBreakdown, money: &Money) -> Table {
    let mut table = Table::new(["Component", "Amount"]);
    for (label, value) in breakdown.rows() {
        table.push_row([label.to_string(), money.plain(value)]);
    }
    table
}

fn detail_table(dossier: &StyleDossier, money: &Money) -> Table {
    let mut table = Table::new(["Source", "ID", "Description", "Cost"]);
    for line in &dossier.bom {
        table.push_row([
            "Material".to_string(),
            line.id.to_string(),
            truncate_str(&line.description, 36),
            money.plain(line.cost()),
        ]);
    }
    for op in &dossier.operations {
        table.push_row([
            "Labor".to_string(),
            op.id.to_string(),
            truncate_str(&op.name, 36),
            money.plain(op.cost()),
        ]);
    }
    for line in &dossier.packaging {
        table.push_row([
            "Packaging".to_string(),
            line.id.to_string(),
            truncate_str(&line.item, 36),
            money.plain(line.per_unit_amount.get()),
        ]);
    }
    table
}
