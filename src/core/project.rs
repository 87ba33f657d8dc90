//! Project workspace discovery and layout

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::identity::EntityId;

/// Suffix of style dossier files
pub const STYLE_FILE_SUFFIX: &str = ".plm.yaml";

/// A PLM workspace: a directory holding `.plm/` and `styles/`
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Find the workspace by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current = std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the workspace by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            if current.join(".plm").is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new workspace at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if root.join(".plm").exists() {
            return Err(ProjectError::AlreadyExists(root));
        }

        Self::create_layout(root)
    }

    /// Initialize even if `.plm/` exists; the config file is rewritten, styles are kept
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_layout(root)
    }

    fn create_layout(root: PathBuf) -> Result<Self, ProjectError> {
        let plm_dir = root.join(".plm");
        std::fs::create_dir_all(&plm_dir).map_err(|e| ProjectError::IoError(e.to_string()))?;
        std::fs::write(plm_dir.join("config.yaml"), Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;
        std::fs::create_dir_all(root.join("styles"))
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        Ok(Self { root })
    }

    fn default_config() -> &'static str {
        r#"# PLM workspace configuration

# Default author for decisions (can be overridden by global config)
# author: ""

# Style used when --style is not given
# default_style: STYLE-SS25-TEECREW-001

# Default output format (auto, yaml, json, tsv, csv, md)
# default_format: auto

# Currency symbol and decimal places for cost output
# currency_symbol: "$"
# precision: 3
"#
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.plm` configuration directory
    pub fn plm_dir(&self) -> PathBuf {
        self.root.join(".plm")
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.root.join("styles")
    }

    /// Path of the dossier file for a style
    pub fn style_path(&self, id: &EntityId) -> PathBuf {
        self.styles_dir().join(format!("{}{}", id, STYLE_FILE_SUFFIX))
    }

    /// Iterate all style dossier files, sorted by path
    pub fn iter_style_files(&self) -> impl Iterator<Item = PathBuf> {
        walkdir::WalkDir::new(self.styles_dir())
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().to_string_lossy().ends_with(STYLE_FILE_SUFFIX))
            .map(|e| e.path().to_path_buf())
    }

    /// Style ids derived from the dossier file names
    pub fn style_ids(&self) -> Vec<EntityId> {
        self.iter_style_files()
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                name.strip_suffix(STYLE_FILE_SUFFIX)?.parse().ok()
            })
            .collect()
    }
}

/// Errors that can occur during workspace operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not a PLM workspace (searched from {searched_from:?}). Run 'plm init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("PLM workspace already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}
