//! `plm marker` command - Marker dimensions and utilization

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::format_percent;
use crate::cli::table::{emit, Table};
use crate::cli::{GlobalOpts, Session};
use crate::core::numeric::Amount;
use crate::costing::{MarkerError, MarkerUtilization};
use crate::entities::MarkerConfig;

#[derive(Subcommand, Debug)]
pub enum MarkerCommands {
    /// Show marker dimensions with efficiency and end loss
    Show,

    /// Change marker dimensions
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Marker width (cm)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<Amount>,

    /// Marker length (cm)
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<Amount>,

    /// Total garment piece area (cm²)
    #[arg(long, allow_negative_numbers = true)]
    pub area: Option<Amount>,

    /// End loss (cm)
    #[arg(long = "end-loss", allow_negative_numbers = true)]
    pub end_loss: Option<Amount>,
}

#[derive(Serialize)]
struct MarkerView<'a> {
    #[serde(flatten)]
    config: &'a MarkerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    utilization: Option<MarkerUtilization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> MarkerView<'a> {
    fn new(config: &'a MarkerConfig, result: Result<MarkerUtilization, MarkerError>) -> Self {
        match result {
            Ok(utilization) => Self {
                config,
                utilization: Some(utilization),
                error: None,
            },
            Err(e) => Self {
                config,
                utilization: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn run(cmd: MarkerCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    match cmd {
        MarkerCommands::Show => run_show(&session),
        MarkerCommands::Set(args) => run_set(&session, args),
    }
}

fn run_show(session: &Session) -> Result<()> {
    let loaded = session.load()?;
    let view = MarkerView::new(&loaded.dossier.marker, loaded.dossier.marker_utilization());
    emit(session.format(), &view, &marker_table(&view))
}

fn marker_table(view: &MarkerView<'_>) -> Table {
    let config = view.config;
    let mut table = Table::new(["Field", "Value"]);
    table.push_row(["Width".to_string(), config.marker_width.to_string()]);
    table.push_row(["Length".to_string(), config.marker_length.to_string()]);
    table.push_row(["Garment area".to_string(), config.garment_area.to_string()]);
    table.push_row(["End loss".to_string(), config.end_loss.to_string()]);

    match (&view.utilization, &view.error) {
        (Some(u), _) => {
            table.push_row(["Efficiency".to_string(), format_percent(u.efficiency_percent)]);
            table.push_row(["End loss %".to_string(), format_percent(u.end_loss_percent)]);
        }
        (None, Some(reason)) => {
            table.push_row(["Efficiency".to_string(), format!("n/a ({})", reason)]);
            table.push_row(["End loss %".to_string(), "n/a".to_string()]);
        }
        (None, None) => {}
    }
    table
}

fn run_set(session: &Session, args: SetArgs) -> Result<()> {
    let mut dossier = session.load_for_edit()?;
    let marker = &mut dossier.marker;
    if let Some(width) = args.width {
        marker.marker_width = width;
    }
    if let Some(length) = args.length {
        marker.marker_length = length;
    }
    if let Some(area) = args.area {
        marker.garment_area = area;
    }
    if let Some(end_loss) = args.end_loss {
        marker.end_loss = end_loss;
    }

    session.save(&dossier)?;
    match dossier.marker_utilization() {
        Ok(u) => session.note(format!(
            "{} Marker updated: efficiency {}, end loss {}",
            style("✓").green(),
            style(format_percent(u.efficiency_percent)).bold(),
            format_percent(u.end_loss_percent)
        )),
        Err(e) => session.note(format!(
            "{} Marker updated, but {}",
            style("!").yellow(),
            e
        )),
    }
    Ok(())
}
