//! `plm bom` command - Bill of materials lines

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{parse_record_id, truncate_str, Money};
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::identity::EntityPrefix;
use crate::core::numeric::Amount;
use crate::costing::material_cost;
use crate::entities::BomLine;

#[derive(Subcommand, Debug)]
pub enum BomCommands {
    /// List BOM lines with their cost contribution
    List,

    /// Add a BOM line
    Add(AddArgs),

    /// Edit fields of an existing BOM line
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Line type (Fabric, Trim, Thread, Label...)
    #[arg(long = "type", short = 't')]
    pub kind: String,

    /// Description
    pub description: String,

    #[arg(long)]
    pub supplier: Option<String>,

    /// Unit of measure (m, pcs, cone...)
    #[arg(long, default_value = "m")]
    pub uom: String,

    /// Consumption per garment
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub consumption: Amount,

    /// Waste in percentage points (5 = 5%)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub waste: Amount,

    /// Price per unit of measure
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub price: Amount,

    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Indent level in the BOM tree
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    #[arg(long)]
    pub effectivity: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// BOM line id (BOM-1, or just 1)
    pub id: String,

    #[arg(long = "type", short = 't')]
    pub kind: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub supplier: Option<String>,

    #[arg(long)]
    pub uom: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub consumption: Option<Amount>,

    #[arg(long, allow_negative_numbers = true)]
    pub waste: Option<Amount>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<Amount>,

    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long)]
    pub level: Option<u32>,

    #[arg(long)]
    pub effectivity: Option<String>,
}

pub fn run(cmd: BomCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        BomCommands::List => run_list(&session),
        BomCommands::Add(args) => run_add(&session, args),
        BomCommands::Set(args) => run_set(&session, args),
    }
}

fn run_list(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let bom = &loaded.dossier.bom;
    let money = session.money();

    emit(session.format(), bom, &bom_table(bom, &money))?;

    if session.format() == OutputFormat::Auto && !session.global.quiet {
        println!(
            "{} line(s), material {}",
            bom.len(),
            style(money.format(material_cost(bom))).bold()
        );
    }
    Ok(())
}

fn bom_table(bom: &[BomLine], money: &Money) -> Table {
    let mut table = Table::new([
        "ID", "Lvl", "Type", "Description", "Supplier", "UoM", "Cons.", "Waste %", "Price", "Cur",
        "Cost",
    ]);
    for line in bom {
        table.push_row([
            line.id.to_string(),
            line.level.to_string(),
            line.kind.clone(),
            truncate_str(&line.description, 32),
            truncate_str(&line.supplier, 20),
            line.unit_of_measure.clone(),
            line.consumption.to_string(),
            line.waste_percent.to_string(),
            money.plain(line.unit_price.get()),
            line.currency.clone(),
            money.plain(line.cost()),
        ]);
    }
    table
}

fn run_add(session: &Session, args: AddArgs) -> Result<()> {
    let mut dossier = session.load_for_edit()?;

    let mut line = BomLine::new(args.kind, args.description).with_costing(
        args.consumption,
        args.waste,
        args.price,
    );
    line.unit_of_measure = args.uom;
    line.currency = args.currency;
    line.level = args.level;
    if let Some(supplier) = args.supplier {
        line.supplier = supplier;
    }
    if let Some(effectivity) = args.effectivity {
        line.effectivity = effectivity;
    }
    let cost = line.cost();

    let id = dossier
        .add_bom_line(line)
        .map_err(|e| miette::miette!("{}", e))?;
    session.save(&dossier)?;

    if session.global.quiet {
        println!("{}", id);
    } else {
        let money = session.money();
        println!(
            "{} Added {} ({} per garment), FOB now {}",
            style("✓").green(),
            style(&id).cyan(),
            money.format(cost),
            style(money.format(dossier.costing().fob)).bold()
        );
    }
    Ok(())
}

fn run_set(session: &Session, args: SetArgs) -> Result<()> {
    let id = parse_record_id(EntityPrefix::Bom, &args.id)?;
    let mut dossier = session.load_for_edit()?;

    let line = dossier
        .bom_line_mut(&id)
        .map_err(|e| miette::miette!("{}", e))?;
    if let Some(kind) = args.kind {
        line.kind = kind;
    }
    if let Some(description) = args.description {
        line.description = description;
    }
    if let Some(supplier) = args.supplier {
        line.supplier = supplier;
    }
    if let Some(uom) = args.uom {
        line.unit_of_measure = uom;
    }
    if let Some(consumption) = args.consumption {
        line.consumption = consumption;
    }
    if let Some(waste) = args.waste {
        line.waste_percent = waste;
    }
    if let Some(price) = args.price {
        line.unit_price = price;
    }
    if let Some(currency) = args.currency {
        line.currency = currency;
    }
    if let Some(level) = args.level {
        line.level = level;
    }
    if let Some(effectivity) = args.effectivity {
        line.effectivity = effectivity;
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
