//! `plm overhead` command - Overhead basis and amounts

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::Money;
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, Session};
use crate::core::numeric::Amount;
use crate::entities::{OverheadBasis, OverheadConfig};

#[derive(Subcommand, Debug)]
pub enum OverheadCommands {
    /// Show the overhead configuration and the resulting overhead cost
    Show,

    /// Change the overhead configuration
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// labor_percent or per_unit (anything else means labor_percent)
    #[arg(long)]
    pub basis: Option<OverheadBasis>,

    /// Share of labor cost as a fraction (0.3 = 30%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<Amount>,

    /// Flat amount per garment
    #[arg(long = "per-unit", allow_negative_numbers = true)]
    pub per_unit: Option<Amount>,
}

#[derive(Serialize)]
struct OverheadView<'a> {
    #[serde(flatten)]
    config: &'a OverheadConfig,
    labor: f64,
    overhead: f64,
}

pub fn run(cmd: OverheadCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        OverheadCommands::Show => run_show(&session),
        OverheadCommands::Set(args) => run_set(&session, args),
    }
}

fn run_show(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let config = &loaded.dossier.overhead;
    let costing = loaded.dossier.costing();

    let view = OverheadView {
        config,
        labor: costing.labor,
        overhead: costing.overhead,
    };
    let table = overhead_table(config, costing.labor, costing.overhead, &session.money());
    emit(session.format(), &view, &table)
}

fn overhead_table(config: &OverheadConfig, labor: f64, overhead: f64, money: &Money) -> Table {
    let mut table = Table::new(["Field", "Value"]);
    table.push_row(["Basis".to_string(), config.basis.to_string()]);
    table.push_row([
        "Rate (of labor)".to_string(),
        format!("{:.1}%", config.rate_percent.get() * 100.0),
    ]);
    table.push_row([
        "Per unit".to_string(),
        money.format(config.per_unit_amount.get()),
    ]);
    table.push_row(["Labor".to_string(), money.format(labor)]);
    table.push_row(["Overhead".to_string(), money.format(overhead)]);
    table
}

fn run_set(session: &Session, args: SetArgs) -> Result<()> {
    if args.basis.is_none() && args.rate.is_none() && args.per_unit.is_none() {
        return Err(miette::miette!(
            help = "pass --basis, --rate or --per-unit",
            "nothing to change"
        ));
    }

    let mut dossier = session.load_for_edit()?;
    if let Some(basis) = args.basis {
        dossier.overhead.basis = basis;
    }
    if let Some(rate) = args.rate {
        dossier.overhead.rate_percent = rate;
    }
    if let Some(per_unit) = args.per_unit {
        dossier.overhead.per_unit_amount = per_unit;
    }

    session.save(&dossier)?;
    let costing = dossier.costing();
    let money = session.money();
    session.note(format!(
        "{} Overhead basis {}: overhead {}, CMT {}",
        style("✓").green(),
        style(dossier.overhead.basis).cyan(),
        money.format(costing.overhead),
        style(money.format(costing.cmt)).bold()
    ));
    Ok(())
}
