//! `plm status` command - Style dashboard

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{check_mark, format_percent, sparkline, Money};
use crate::cli::{GlobalOpts, OutputFormat, Session};
use crate::core::identity::EntityId;
use crate::costing::{CostBreakdown, MarkerUtilization};
use crate::entities::{Stage, StyleDossier};

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Show only one section (gates, risks, kpis, cost, sourcing, changes, validation)
    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    style: &'a EntityId,
    title: &'a str,
    stage: Stage,
    gates_done: usize,
    gates_total: usize,
    risks: &'a [String],
    costing: CostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<MarkerUtilization>,
    open_rfqs: usize,
    quotes: usize,
    open_changes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    oldest_change_days: Option<u32>,
    samples: usize,
    failed_tests: usize,
    fallback: bool,
}

impl<'a> StatusReport<'a> {
    fn collect(dossier: &'a StyleDossier, fallback: bool) -> Self {
        let s = &dossier.style;
        let changes = &dossier.changes;
        Self {
            style: dossier.id(),
            title: &s.title,
            stage: s.stage,
            gates_done: s.gates_done(),
            gates_total: s.gates.len(),
            risks: &s.risks,
            costing: dossier.costing(),
            marker: dossier.marker_utilization().ok(),
            open_rfqs: dossier
                .rfqs
                .iter()
                .filter(|r| r.status.eq_ignore_ascii_case("open"))
                .count(),
            quotes: dossier.quotes.len(),
            open_changes: changes
                .ecr
                .iter()
                .chain(changes.eco.iter())
                .filter(|c| !is_closed(&c.state))
                .count(),
            oldest_change_days: changes.oldest().map(|c| c.age_days),
            samples: dossier.validation.samples.len(),
            failed_tests: dossier.validation.failed_tests(),
            fallback,
        }
    }
}

fn is_closed(state: &str) -> bool {
    matches!(
        state.to_lowercase().as_str(),
        "closed" | "done" | "implemented" | "rejected"
    )
}

const SECTIONS: &[&str] = &[
    "gates",
    "risks",
    "kpis",
    "cost",
    "sourcing",
    "changes",
    "validation",
];

pub fn run(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;

    if let Some(section) = &args.section {
        if !SECTIONS.contains(&section.as_str()) {
            return Err(miette::miette!(
                help = format!("valid sections: {}", SECTIONS.join(", ")),
                "unknown section '{}'",
                section
            ));
        }
    }

    let loaded = session.load()?;
    let report = StatusReport::collect(&loaded.dossier, loaded.origin.is_fallback());

    match session.format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&report).into_diagnostic()?);
        }
        _ => print!(
            "{}",
            render_dashboard(&loaded.dossier, &report, &session.money(), args.section.as_deref())
        ),
    }
    Ok(())
}

fn heading(title: &str) -> String {
    format!("\n{}\n", style(title).bold())
}

fn render_dashboard(
    dossier: &StyleDossier,
    report: &StatusReport<'_>,
    money: &Money,
    only: Option<&str>,
) -> String {
    let show = |name: &str| only.map_or(true, |o| o == name);
    let mut out = String::new();
    let width = 56;

    out.push_str(&format!(
        "{}  {}\n",
        style(report.title).bold().underlined(),
        style(report.style).cyan()
    ));
    out.push_str(&format!(
        "Stage: {}   Season: {}   Manager: {}\n",
        report.stage, dossier.style.season, dossier.style.manager
    ));
    if report.fallback {
        out.push_str(&format!("{}\n", style("(sample data)").yellow()));
    }
    out.push_str(&"═".repeat(width));
    out.push('\n');

    if show("gates") {
        out.push_str(&heading(&format!(
            "GATES {}/{}",
            report.gates_done, report.gates_total
        )));
        for gate in &dossier.style.gates {
            out.push_str(&format!("  {} {}\n", check_mark(gate.done), gate.label));
        }
    }

    if show("risks") {
        out.push_str(&heading("CRITICAL RISKS"));
        if report.risks.is_empty() {
            out.push_str("  none\n");
        }
        for risk in report.risks {
            out.push_str(&format!("  {} {}\n", style("!").red(), risk));
        }
    }

    if show("kpis") {
        out.push_str(&heading("KPIs"));
        for kpi in &dossier.kpis {
            let last = kpi
                .series
                .last()
                .map(|v| format!("{}", v))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "  {:<20} {}  {}\n",
                kpi.name,
                sparkline(&kpi.series),
                last
            ));
        }
        match &report.marker {
            Some(m) => out.push_str(&format!(
                "  {:<20} {}  (end loss {})\n",
                "Marker efficiency",
                format_percent(m.efficiency_percent),
                format_percent(m.end_loss_percent)
            )),
            None => out.push_str(&format!("  {:<20} n/a\n", "Marker efficiency")),
        }
        out.push_str(&format!(
            "  {:<20} {} POM, {} test method(s), {} 3D asset(s)\n",
            "Specs",
            dossier.specs.pom.len(),
            dossier.specs.tests.len(),
            dossier.assets.len()
        ));
    }

    if show("cost") {
        let c = &report.costing;
        out.push_str(&heading("COST"));
        out.push_str(&format!(
            "  Material {}   CMT {}   Packaging {}\n",
            money.format(c.material),
            money.format(c.cmt),
            money.format(c.packaging)
        ));
        out.push_str(&format!("  FOB (no freight) {}\n", style(money.format(c.fob)).bold()));
    }

    if show("sourcing") {
        out.push_str(&heading("SOURCING"));
        out.push_str(&format!(
            "  {} open RFQ(s), {} quote(s)\n",
            report.open_rfqs, report.quotes
        ));
    }

    if show("changes") {
        out.push_str(&heading("CHANGES"));
        out.push_str(&format!(
            "  {} ECR, {} ECO, {} open",
            dossier.changes.ecr.len(),
            dossier.changes.eco.len(),
            report.open_changes
        ));
        if let Some(days) = report.oldest_change_days {
            out.push_str(&format!(", oldest {} day(s)", days));
        }
        out.push('\n');
    }

    if show("validation") {
        out.push_str(&heading("VALIDATION"));
        let failed = if report.failed_tests > 0 {
            style(report.failed_tests.to_string()).red().to_string()
        } else {
            report.failed_tests.to_string()
        };
        out.push_str(&format!(
            "  {} sample(s), {} lab result(s), {} failed\n",
            report.samples,
            dossier.validation.lab.len(),
            failed
        ));
    }

    out
}
