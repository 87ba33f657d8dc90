//! `plm op` command - Sewing operations

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{parse_record_id, truncate_str, Money};
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::identity::EntityPrefix;
use crate::core::numeric::{Amount, Efficiency};
use crate::costing::labor_cost;
use crate::entities::Operation;

#[derive(Subcommand, Debug)]
pub enum OpCommands {
    /// List operations with their labor cost
    List,

    /// Add an operation
    Add(AddArgs),

    /// Edit fields of an existing operation
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Operation name
    pub name: String,

    /// Standard minute value
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub smv: Amount,

    /// Labor rate per hour
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub rate: Amount,

    /// Line efficiency as a fraction (0.85); clamped to 0.5..1.0 when costing
    #[arg(long, short = 'e', default_value = "0.85", allow_negative_numbers = true)]
    pub efficiency: Efficiency,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Operation id (OP-1, or just 1)
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub smv: Option<Amount>,

    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<Amount>,

    #[arg(long, short = 'e', allow_negative_numbers = true)]
    pub efficiency: Option<Efficiency>,
}

pub fn run(cmd: OpCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        OpCommands::List => run_list(&session),
        OpCommands::Add(args) => run_add(&session, args),
        OpCommands::Set(args) => run_set(&session, args),
    }
}

fn run_list(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let ops = &loaded.dossier.operations;
    let money = session.money();

    emit(session.format(), ops, &op_table(ops, &money))?;

    if session.format() == OutputFormat::Auto && !session.global.quiet {
        let total_smv = ops.iter().fold(0.0, |acc, op| acc + op.smv.get());
        println!(
            "{} operation(s), {:.2} SMV, labor {}",
            ops.len(),
            total_smv,
            style(money.format(labor_cost(ops))).bold()
        );
    }
    Ok(())
}

fn op_table(ops: &[Operation], money: &Money) -> Table {
    let mut table = Table::new(["ID", "Operation", "SMV", "Rate/h", "Eff.", "Eff. used", "Cost"]);
    for op in ops {
        table.push_row([
            op.id.to_string(),
            truncate_str(&op.name, 28),
            op.smv.to_string(),
            money.plain(op.rate_per_hour.get()),
            op.efficiency.to_string(),
            format!("{:.2}", op.efficiency.effective()),
            money.plain(op.cost()),
        ]);
    }
    table
}

fn run_add(session: &Session, args: AddArgs) -> Result<()> {
    let mut dossier = session.load_for_edit()?;

    let op = Operation::new(args.name, args.smv, args.rate, args.efficiency);
    let cost = op.cost();
    let id = dossier
        .add_operation(op)
        .map_err(|e| miette::miette!("{}", e))?;
    session.save(&dossier)?;

    if session.global.quiet {
        println!("{}", id);
    } else {
        let money = session.money();
        println!(
            "{} Added {} ({} per garment), CMT now {}",
            style("✓").green(),
            style(&id).cyan(),
            money.format(cost),
            style(money.format(dossier.costing().cmt)).bold()
        );
    }
    Ok(())
}

fn run_set(session: &Session, args: SetArgs) -> Result<()> {
    let id = parse_record_id(EntityPrefix::Op, &args.id)?;
    let mut dossier = session.load_for_edit()?;

    let op = dossier
        .operation_mut(&id)
        .map_err(|e| miette::miette!("{}", e))?;
    if let Some(name) = args.name {
        op.name = name;
    }
    if let Some(smv) = args.smv {
        op.smv = smv;
    }
    if let Some(rate) = args.rate {
        op.rate_per_hour = rate;
    }
    if let Some(efficiency) = args.efficiency {
        op.efficiency = efficiency;
    }

    session.save(&dossier)?;
    session.note(format!(
        "{} Updated {}, CMT now {}",
        style("✓").green(),
        style(&id).cyan(),
        style(session.money().format(dossier.costing().cmt)).bold()
    ));
    Ok(())
}
