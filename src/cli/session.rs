//! Per-invocation state shared by commands
//!
//! Resolves the workspace, the effective configuration and the style a
//! command operates on. Read-only commands go through [`Session::load`],
//! which falls back to the sample style; editing commands use
//! [`Session::load_for_edit`], which never does.

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{parse_record_id, Money};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::source::{load_with_fallback, FileSource, MockSource, Origin, StyleSource};
use crate::core::{loader, Config, Project};
use crate::entities::defaults::SAMPLE_STYLE_ID;
use crate::entities::StyleDossier;

pub struct Session {
    pub global: GlobalOpts,
    pub config: Config,
    project: Option<Project>,
}

/// A dossier plus where it came from
pub struct Loaded {
    pub dossier: StyleDossier,
    pub origin: Origin,
}

impl Session {
    /// Discover the workspace; an explicit `--project` must point at one
    pub fn open(global: &GlobalOpts) -> Result<Self> {
        let project = match &global.project {
            Some(path) => Some(Project::discover_from(path).map_err(|e| miette::miette!("{}", e))?),
            None => Project::discover().ok(),
        };
        let config = Config::load_for(project.as_ref());

        Ok(Self {
            global: global.clone(),
            config,
            project,
        })
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn require_project(&self) -> Result<&Project> {
        self.project.as_ref().ok_or_else(|| {
            miette::miette!(
                help = "run 'plm init' (or 'plm init --sample') to create one",
                "not inside a PLM workspace"
            )
        })
    }

    /// `--format`, or the configured default when left on auto
    pub fn format(&self) -> OutputFormat {
        match self.global.format {
            OutputFormat::Auto => self
                .config
                .default_format
                .as_deref()
                .and_then(OutputFormat::from_name)
                .unwrap_or(OutputFormat::Auto),
            explicit => explicit,
        }
    }

    pub fn money(&self) -> Money {
        Money::from_config(&self.config)
    }

    /// `--style`, then config `default_style`, then the only style in the
    /// workspace, then the sample style
    pub fn style_id(&self) -> Result<EntityId> {
        if let Some(raw) = self.global.style.as_deref().or(self.config.default_style.as_deref()) {
            return parse_style_id(raw);
        }

        if let Some(project) = &self.project {
            let ids = project.style_ids();
            if ids.len() == 1 {
                return Ok(ids[0].clone());
            }
            if ids.len() > 1 {
                tracing::debug!(count = ids.len(), "several styles, none selected; using sample id");
            }
        }

        parse_style_id(SAMPLE_STYLE_ID)
    }

    /// Load the selected style, falling back to the sample style on error
    pub fn load(&self) -> Result<Loaded> {
        let id = self.style_id()?;
        let source: Box<dyn StyleSource> = match &self.project {
            Some(project) => Box::new(FileSource::new(project.clone())),
            None => Box::new(MockSource),
        };

        let (dossier, origin) = load_with_fallback(source.as_ref(), &id);
        Ok(Loaded { dossier, origin })
    }

    /// Load the selected style from the workspace for editing
    pub fn load_for_edit(&self) -> Result<StyleDossier> {
        let project = self.require_project()?;
        let id = self.style_id()?;
        Ok(FileSource::new(project.clone()).fetch(&id)?)
    }

    pub fn save(&self, dossier: &StyleDossier) -> Result<PathBuf> {
        let project = self.require_project()?;
        Ok(loader::save(project, dossier)?)
    }

    /// Print a line unless `--quiet`
    pub fn note(&self, message: impl std::fmt::Display) {
        if !self.global.quiet {
            println!("{}", message);
        }
    }
}

/// Accept a full style id or just its key (`SS25-TEECREW-001`)
pub fn parse_style_id(raw: &str) -> Result<EntityId> {
    parse_record_id(EntityPrefix::Style, raw)
}
