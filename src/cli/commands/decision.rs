//! `plm decision` command - Decision log

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::truncate_str;
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, Session};
use crate::entities::Decision;

#[derive(Subcommand, Debug)]
pub enum DecisionCommands {
    /// List logged decisions, newest first
    List,

    /// Log a decision
    Add(AddArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Short title
    pub title: String,

    /// Problem being decided
    #[arg(long)]
    pub problem: Option<String>,

    /// Options that were considered
    #[arg(long)]
    pub options: Option<String>,

    /// What was decided
    #[arg(long)]
    pub outcome: Option<String>,

    /// Owner (default: configured author)
    #[arg(long)]
    pub owner: Option<String>,
}

pub fn run(cmd: DecisionCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        DecisionCommands::List => run_list(&session),
        DecisionCommands::Add(args) => run_add(&session, args),
    }
}

fn run_list(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let mut decisions: Vec<&Decision> = loaded.dossier.decisions.iter().collect();
    decisions.sort_by(|a, b| b.date.cmp(&a.date));

    if decisions.is_empty() {
        session.note("No decisions logged.");
        return Ok(());
    }
    emit(session.format(), &decisions, &decision_table(&decisions))
}

fn decision_table(decisions: &[&Decision]) -> Table {
    let mut table = Table::new(["ID", "Date", "Title", "Outcome", "Owner"]);
    for decision in decisions {
        table.push_row([
            decision.id.to_string(),
            decision.date.clone(),
            truncate_str(&decision.title, 32),
            truncate_str(&decision.outcome, 40),
            decision.owner.clone(),
        ]);
    }
    table
}

fn run_add(session: &Session, args: AddArgs) -> Result<()> {
    let mut dossier = session.load_for_edit()?;

    let owner = args.owner.unwrap_or_else(|| session.config.author());
    let mut decision = Decision::new(args.title, owner);
    decision.problem = args.problem.unwrap_or_default();
    decision.options = args.options.unwrap_or_default();
    decision.outcome = args.outcome.unwrap_or_default();

    let id = dossier
        .add_decision(decision)
        .map_err(|e| miette::miette!("{}", e))?;
    session.save(&dossier)?;

    if session.global.quiet {
        println!("{}", id);
    } else {
        println!("{} Logged decision {}", style("✓").green(), style(&id).cyan());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn test_decision_table_columns() {
        let mut decision = Decision::new("Switch rib supplier", "Dana");
        decision.date = "2025-03-01".to_string();
        decision.outcome = "Approved".to_string();

        let out = decision_table(&[&decision]).render(OutputFormat::Tsv).unwrap();
        let cells: Vec<&str> = out.lines().nth(1).unwrap().split('\t').collect();
        assert_eq!(&cells[1..], ["2025-03-01", "Switch rib supplier", "Approved", "Dana"]);
    }
}
