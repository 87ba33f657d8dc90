//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    bom::BomCommands, completions::CompletionsArgs, config::ConfigCommands, cost::CostArgs,
    decision::DecisionCommands, init::InitArgs, marker::MarkerCommands, op::OpCommands,
    overhead::OverheadCommands, pack::PackCommands, quote::QuoteCommands, status::StatusArgs,
    style::StyleCommands,
};

#[derive(Parser)]
#[command(name = "plm")]
#[command(author, version, about = "Apparel style costing toolkit")]
#[command(long_about = "Keeps apparel style dossiers as plain YAML files and computes material, labor, overhead, packaging, CMT and FOB cost plus marker utilization.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Workspace root (default: auto-detect by finding .plm/)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Style to operate on (default: config default_style, the only style, or the sample)
    #[arg(long, short = 's', global = true)]
    pub style: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new PLM workspace
    Init(InitArgs),

    /// Style management (create, list, show)
    #[command(subcommand)]
    Style(StyleCommands),

    /// Bill of materials lines (fabric, trims)
    #[command(subcommand)]
    Bom(BomCommands),

    /// Sewing operations (SMV, rate, efficiency)
    #[command(subcommand)]
    Op(OpCommands),

    /// Packaging lines
    #[command(subcommand)]
    Pack(PackCommands),

    /// Overhead configuration
    #[command(subcommand)]
    Overhead(OverheadCommands),

    /// Marker dimensions and utilization
    #[command(subcommand)]
    Marker(MarkerCommands),

    /// Show the cost breakdown (material, labor, overhead, packaging, CMT, FOB)
    Cost(CostArgs),

    /// Vendor quotes compared against the computed cost
    #[command(subcommand)]
    Quote(QuoteCommands),

    /// Decision log
    #[command(subcommand)]
    Decision(DecisionCommands),

    /// Show the style dashboard
    Status(StatusArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables and summaries
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}

impl OutputFormat {
    /// Parse a format name from configuration
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}
