//! `plm quote` command - Vendor quotes against the computed cost

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{format_percent, truncate_str, Money};
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::costing::{quote_variance, CostBreakdown, QuoteVariance};
use crate::entities::{Quote, Rfq};

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// List vendor quotes with their variance to the computed FOB and CMT
    List,

    /// List open and closed RFQs
    Rfqs,
}

#[derive(Serialize)]
struct QuoteRow<'a> {
    #[serde(flatten)]
    quote: &'a Quote,
    variance: QuoteVariance,
}

pub fn run(cmd: QuoteCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        QuoteCommands::List => run_list(&session),
        QuoteCommands::Rfqs => run_rfqs(&session),
    }
}

fn run_list(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let dossier = &loaded.dossier;
    let costing = dossier.costing();
    let money = session.money();

    if dossier.quotes.is_empty() {
        session.note("No quotes found.");
        return Ok(());
    }

    let rows: Vec<QuoteRow<'_>> = dossier
        .quotes
        .iter()
        .map(|quote| QuoteRow {
            quote,
            variance: quote_variance(quote, &costing),
        })
        .collect();

    emit(session.format(), &rows, &quote_table(&rows, &money))?;

    if session.format() == OutputFormat::Auto && !session.global.quiet {
        print_computed(&costing, &money);
    }
    Ok(())
}

fn print_computed(costing: &CostBreakdown, money: &Money) {
    println!(
        "Computed: FOB {}, CMT {}",
        style(money.format(costing.fob)).bold(),
        money.format(costing.cmt)
    );
}

fn quote_table(rows: &[QuoteRow<'_>], money: &Money) -> Table {
    let mut table = Table::new([
        "ID", "Vendor", "FOB", "CMT", "Lead (d)", "Δ FOB", "Δ FOB %", "Δ CMT", "Notes",
    ]);
    for row in rows {
        let quote = row.quote;
        let variance = &row.variance;
        table.push_row([
            quote.id.to_string(),
            truncate_str(&quote.vendor, 20),
            money.plain(quote.fob.get()),
            money.plain(quote.cmt.get()),
            quote.lead_days.to_string(),
            money.delta(variance.fob_delta),
            variance
                .fob_delta_percent
                .map(format_percent)
                .unwrap_or_else(|| "-".to_string()),
            money.delta(variance.cmt_delta),
            truncate_str(&quote.notes, 32),
        ]);
    }
    table
}

fn run_rfqs(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let rfqs = &loaded.dossier.rfqs;

    if rfqs.is_empty() {
        session.note("No RFQs found.");
        return Ok(());
    }
    emit(session.format(), rfqs, &rfq_table(rfqs))
}

fn rfq_table(rfqs: &[Rfq]) -> Table {
    let mut table = Table::new(["ID", "Vendors", "Due", "Status"]);
    for rfq in rfqs {
        table.push_row([
            rfq.id.to_string(),
            rfq.vendors.to_string(),
            rfq.due.clone(),
            rfq.status.clone(),
        ]);
    }
    table
}
