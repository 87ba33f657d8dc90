//! `plm style` command - Create, list and show styles

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{check_mark, truncate_str, Money};
use crate::cli::session::parse_style_id;
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::identity::EntityId;
use crate::core::loader;
use crate::entities::defaults::sample_dossier;
use crate::entities::{Stage, Style, StyleDossier};

#[derive(Subcommand, Debug)]
pub enum StyleCommands {
    /// Create a new, empty style in the workspace
    New(NewArgs),

    /// List styles in the workspace
    List,

    /// Show the selected style
    Show,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Style id (STYLE-FW25-HOODIE-001, or just FW25-HOODIE-001)
    pub id: String,

    /// Style title
    #[arg(long, short = 't')]
    pub title: String,

    #[arg(long)]
    pub season: Option<String>,

    #[arg(long)]
    pub manager: Option<String>,

    #[arg(long)]
    pub colorway: Option<String>,

    /// Lifecycle stage (idea, definition, proto, quote, validation, rtm, live)
    #[arg(long, default_value = "idea")]
    pub stage: Stage,
}

#[derive(Serialize)]
struct StyleSummary<'a> {
    id: &'a EntityId,
    title: &'a str,
    stage: Stage,
    season: &'a str,
    manager: &'a str,
    fob: f64,
}

impl<'a> StyleSummary<'a> {
    fn of(dossier: &'a StyleDossier) -> Self {
        Self {
            id: dossier.id(),
            title: &dossier.style.title,
            stage: dossier.style.stage,
            season: &dossier.style.season,
            manager: &dossier.style.manager,
            fob: dossier.costing().fob,
        }
    }
}

pub fn run(cmd: StyleCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        StyleCommands::New(args) => run_new(&session, args),
        StyleCommands::List => run_list(&session),
        StyleCommands::Show => run_show(&session),
    }
}

fn run_new(session: &Session, args: NewArgs) -> Result<()> {
    let project = session.require_project()?;
    let id = parse_style_id(&args.id)?;

    if project.style_path(&id).exists() {
        return Err(miette::miette!("style {} already exists", id));
    }

    let mut new_style = Style::new(id.clone(), args.title);
    new_style.stage = args.stage;
    new_style.season = args.season.unwrap_or_default();
    new_style.colorway = args.colorway.unwrap_or_default();
    new_style.manager = args.manager.unwrap_or_else(|| session.config.author());

    let path = session.save(&StyleDossier::new(new_style))?;

    if session.global.quiet {
        println!("{}", id);
    } else {
        println!(
            "{} Created style {}",
            style("✓").green(),
            style(&id).cyan()
        );
        println!("   {}", style(path.display()).dim());
    }
    Ok(())
}

fn run_list(session: &Session) -> Result<()> {
    let dossiers = match session.project() {
        Some(project) => loader::load_all(project),
        None => vec![sample_dossier()],
    };

    if dossiers.is_empty() {
        session.note("No styles found. Create one with 'plm style new'.");
        return Ok(());
    }

    let summaries: Vec<StyleSummary<'_>> = dossiers.iter().map(StyleSummary::of).collect();
    emit(session.format(), &summaries, &style_table(&summaries, &session.money()))
}

fn style_table(summaries: &[StyleSummary<'_>], money: &Money) -> Table {
    let mut table = Table::new(["ID", "Title", "Stage", "Season", "Manager", "FOB"]);
    for s in summaries {
        table.push_row([
            s.id.to_string(),
            truncate_str(s.title, 30),
            s.stage.to_string(),
            s.season.to_string(),
            s.manager.to_string(),
            money.plain(s.fob),
        ]);
    }
    table
}

fn run_show(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let dossier = &loaded.dossier;

    match session.format() {
        OutputFormat::Auto => {
            print!("{}", render_header(dossier, &session.money()));
            Ok(())
        }
        format => emit(format, dossier, &header_table(dossier)),
    }
}

fn render_header(dossier: &StyleDossier, money: &Money) -> String {
    let s = &dossier.style;
    let mut out = String::new();

    out.push_str(&format!("{}\n", style(&s.title).bold()));
    out.push_str(&format!("{}\n", style(&s.id).cyan()));
    out.push_str(&format!(
        "Stage: {}   Season: {}   Colorway: {}   Manager: {}\n",
        s.stage, s.season, s.colorway, s.manager
    ));

    if !s.gates.is_empty() {
        out.push_str(&format!("\nGates ({}/{})\n", s.gates_done(), s.gates.len()));
        for gate in &s.gates {
            out.push_str(&format!("  {} {}\n", check_mark(gate.done), gate.label));
        }
    }

    if !s.milestones.is_empty() {
        out.push_str("\nMilestones\n");
        for m in &s.milestones {
            out.push_str(&format!("  {} {:<12} {}\n", check_mark(m.done), m.date, m.label));
        }
    }

    if !s.risks.is_empty() {
        out.push_str("\nCritical risks\n");
        for risk in &s.risks {
            out.push_str(&format!("  {} {}\n", style("!").red(), risk));
        }
    }

    let costing = dossier.costing();
    out.push_str(&format!(
        "\nBOM lines: {}   Operations: {}   FOB: {}\n",
        dossier.bom.len(),
        dossier.operations.len(),
        money.format(costing.fob)
    ));
    out
}

fn header_table(dossier: &StyleDossier) -> Table {
    let s = &dossier.style;
    let mut table = Table::new(["Field", "Value"]);
    table.push_row(["ID".to_string(), s.id.to_string()]);
    table.push_row(["Title".to_string(), s.title.clone()]);
    table.push_row(["Stage".to_string(), s.stage.to_string()]);
    table.push_row(["Season".to_string(), s.season.clone()]);
    table.push_row(["Colorway".to_string(), s.colorway.clone()]);
    table.push_row(["Manager".to_string(), s.manager.clone()]);
    table.push_row([
        "Gates".to_string(),
        format!("{}/{}", s.gates_done(), s.gates.len()),
    ]);
    table.push_row(["Risks".to_string(), s.risks.join("; ")]);
    table
}
