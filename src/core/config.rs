//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::Project;

/// Default number of decimals for cost output
pub const DEFAULT_PRECISION: usize = 3;

/// PLM configuration, merged from built-in defaults, the user config,
/// the workspace config and the environment (later layers win)
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default author for new decisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Style used when `--style` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,

    /// Symbol printed in front of cost figures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,

    /// Decimal places for cost figures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        Self::load_for(Project::discover().ok().as_ref())
    }

    /// Same as [`Config::load`] with an explicit workspace
    pub fn load_for(project: Option<&Project>) -> Self {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        if let Some(project) = project {
            if let Some(project_config) = Self::read_file(&Self::project_config_path(project)) {
                config.merge(project_config);
            }
        }

        if let Ok(author) = std::env::var("PLM_AUTHOR") {
            config.author = Some(author);
        }
        if let Ok(style) = std::env::var("PLM_STYLE") {
            config.default_style = Some(style);
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                None
            }
        }
    }

    /// Path to the user-level config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "plm").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    pub fn project_config_path(project: &Project) -> PathBuf {
        project.plm_dir().join("config.yaml")
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.default_style.is_some() {
            self.default_style = other.default_style;
        }
        if other.currency_symbol.is_some() {
            self.currency_symbol = other.currency_symbol;
        }
        if other.precision.is_some() {
            self.precision = other.precision;
        }
    }

    /// Author name, falling back to the login name
    pub fn author(&self) -> String {
        if let Some(ref author) = self.author {
            return author.clone();
        }

        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("$")
    }

    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }
}
