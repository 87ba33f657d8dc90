//! `plm pack` command - Packaging lines

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{parse_record_id, Money};
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::identity::EntityPrefix;
use crate::core::numeric::Amount;
use crate::costing::packaging_cost;
use crate::entities::PackagingLine;

#[derive(Subcommand, Debug)]
pub enum PackCommands {
    /// List packaging lines
    List,

    /// Add a packaging line
    Add(AddArgs),

    /// Edit an existing packaging line
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Item (polybag, hangtag, carton share...)
    pub item: String,

    /// Cost per garment
    #[arg(long, short = 'a', default_value = "0", allow_negative_numbers = true)]
    pub amount: Amount,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Packaging line id (PK-1, or just 1)
    pub id: String,

    #[arg(long)]
    pub item: Option<String>,

    #[arg(long, short = 'a', allow_negative_numbers = true)]
    pub amount: Option<Amount>,
}

pub fn run(cmd: PackCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        PackCommands::List => run_list(&session),
        PackCommands::Add(args) => run_add(&session, args),
        PackCommands::Set(args) => run_set(&session, args),
    }
}

fn run_list(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let lines = &loaded.dossier.packaging;
    let money = session.money();

    emit(session.format(), lines, &pack_table(lines, &money))?;

    if session.format() == OutputFormat::Auto && !session.global.quiet {
        println!(
            "{} line(s), packaging {}",
            lines.len(),
            style(money.format(packaging_cost(lines))).bold()
        );
    }
    Ok(())
}

fn pack_table(lines: &[PackagingLine], money: &Money) -> Table {
    let mut table = Table::new(["ID", "Item", "Per unit"]);
    for line in lines {
        table.push_row([
            line.id.to_string(),
            line.item.clone(),
            money.plain(line.per_unit_amount.get()),
        ]);
    }
    table
}

fn run_add(session: &Session, args: AddArgs) -> Result<()> {
    let mut dossier = session.load_for_edit()?;

    let id = dossier
        .add_packaging(PackagingLine::new(args.item, args.amount))
        .map_err(|e| miette::miette!("{}", e))?;
    session.save(&dossier)?;

    if session.global.quiet {
        println!("{}", id);
    } else {
        println!(
            "{} Added {}, FOB now {}",
            style("✓").green(),
            style(&id).cyan(),
            style(session.money().format(dossier.costing().fob)).bold()
        );
    }
    Ok(())
}

fn run_set(session: &Session, args: SetArgs) -> Result<()> {
    let id = parse_record_id(EntityPrefix::Pk, &args.id)?;
    let mut dossier = session.load_for_edit()?;

    let line = dossier
        .packaging_mut(&id)
        .map_err(|e| miette::miette!("{}", e))?;
    if let Some(item) = args.item {
        line.item = item;
    }
    if let Some(amount) = args.amount {
        line.per_unit_amount = amount;
    }

    session.save(&dossier)?;
    session.note(format!(
        "{} Updated {}, FOB now {}",
        style("✓").green(),
        style(&id).cyan(),
        style(session.money().format(dossier.costing().fob)).bold()
    ));
    Ok(())
}
