//! Style data sources
//!
//! A [`StyleSource`] hands out a [`StyleDossier`] for a style id. The
//! workspace reads YAML files through [`FileSource`]; [`MockSource`] serves
//! the built-in sample style. [`load_with_fallback`] never fails: any source
//! error is logged and the sample style is returned instead.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::identity::EntityId;
use crate::core::project::Project;
use crate::entities::defaults::sample_dossier;
use crate::entities::StyleDossier;
use crate::yaml::{parse_yaml_file, YamlError, YamlSyntaxError};

/// Something that can supply a style dossier by id
pub trait StyleSource {
    /// Short name used in log output
    fn name(&self) -> &str;

    fn fetch(&self, id: &EntityId) -> Result<StyleDossier, SourceError>;
}

/// Errors raised while fetching a style
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("style {0} not found")]
    #[diagnostic(
        code(plm::source::not_found),
        help("create it with 'plm style new' or pass --style")
    )]
    NotFound(EntityId),

    #[error("failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] YamlSyntaxError),

    #[error("{path:?} holds style {found}, expected {expected}")]
    Mismatch {
        path: PathBuf,
        expected: EntityId,
        found: EntityId,
    },
}

/// Serves the built-in sample style under its own id
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

impl StyleSource for MockSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn fetch(&self, id: &EntityId) -> Result<StyleDossier, SourceError> {
        let dossier = sample_dossier();
        if dossier.id() != id {
            return Err(SourceError::NotFound(id.clone()));
        }
        Ok(dossier)
    }
}

/// Reads `styles/<ID>.plm.yaml` from a workspace
#[derive(Debug, Clone)]
pub struct FileSource {
    project: Project,
}

impl FileSource {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }
}

impl StyleSource for FileSource {
    fn name(&self) -> &str {
        "workspace"
    }

    fn fetch(&self, id: &EntityId) -> Result<StyleDossier, SourceError> {
        let path = self.project.style_path(id);
        if !path.exists() {
            return Err(SourceError::NotFound(id.clone()));
        }

        let dossier: StyleDossier = parse_yaml_file(&path).map_err(|e| match e {
            YamlError::Syntax(syntax) => SourceError::Parse(syntax),
            other => SourceError::Io {
                path: path.clone(),
                message: other.to_string(),
            },
        })?;

        if dossier.id() != id {
            return Err(SourceError::Mismatch {
                path,
                expected: id.clone(),
                found: dossier.id().clone(),
            });
        }

        tracing::debug!(style = %id, source = self.name(), "loaded style");
        Ok(dossier)
    }
}

/// Where a dossier handed out by [`load_with_fallback`] came from
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    /// Fetched from the named source
    Source(String),
    /// The source failed; the sample style was used
    Fallback { reason: String },
}

impl Origin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Origin::Fallback { .. })
    }
}

/// Fetch a style, falling back to the sample style on any error
pub fn load_with_fallback(source: &dyn StyleSource, id: &EntityId) -> (StyleDossier, Origin) {
    match source.fetch(id) {
        Ok(dossier) => (dossier, Origin::Source(source.name().to_string())),
        Err(e) => {
            tracing::warn!(style = %id, source = source.name(), error = %e, "using sample data");
            (
                sample_dossier(),
                Origin::Fallback {
                    reason: e.to_string(),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::defaults::SAMPLE_STYLE_ID;
    use crate::entities::Style;
    use crate::yaml::write_yaml_file;
    use tempfile::tempdir;

    fn workspace() -> (tempfile::TempDir, Project) {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        (tmp, project)
    }

    #[test]
    fn test_mock_source_serves_sample() {
        let id = EntityId::parse(SAMPLE_STYLE_ID).unwrap();
        let dossier = MockSource.fetch(&id).unwrap();
        assert_eq!(dossier.id(), &id);
    }

    #[test]
    fn test_mock_source_rejects_other_ids() {
        let id = EntityId::parse("STYLE-OTHER").unwrap();
        let err = MockSource.fetch(&id).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_unknown_style_without_workspace_is_fallback() {
        let id = EntityId::parse("STYLE-OTHER").unwrap();
        let (dossier, origin) = load_with_fallback(&MockSource, &id);
        assert!(origin.is_fallback());
        assert_eq!(dossier.id().to_string(), SAMPLE_STYLE_ID);
    }

    #[test]
    fn test_file_source_reads_saved_style() {
        let (_tmp, project) = workspace();
        let id = EntityId::parse("STYLE-FW25-HOODIE").unwrap();
        let dossier = StyleDossier::new(Style::new(id.clone(), "FW25 Hoodie"));
        write_yaml_file(&project.style_path(&id), &dossier).unwrap();

        let loaded = FileSource::new(project).fetch(&id).unwrap();
        assert_eq!(loaded.style.title, "FW25 Hoodie");
    }

    #[test]
    fn test_file_source_missing_style() {
        let (_tmp, project) = workspace();
        let id = EntityId::parse("STYLE-NOPE").unwrap();
        let err = FileSource::new(project).fetch(&id).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_file_source_id_mismatch() {
        let (_tmp, project) = workspace();
        let stored = EntityId::parse("STYLE-A").unwrap();
        let asked = EntityId::parse("STYLE-B").unwrap();
        let dossier = StyleDossier::new(Style::new(stored, "A"));
        write_yaml_file(&project.style_path(&asked), &dossier).unwrap();

        let err = FileSource::new(project).fetch(&asked).unwrap_err();
        assert!(matches!(err, SourceError::Mismatch { .. }));
    }

    #[test]
    fn test_broken_file_falls_back_to_sample() {
        crate::logging::init_test();
        let (_tmp, project) = workspace();
        let id = EntityId::parse("STYLE-BROKEN").unwrap();
        std::fs::write(project.style_path(&id), "style: [unclosed\n").unwrap();

        let (dossier, origin) = load_with_fallback(&FileSource::new(project), &id);
        assert!(origin.is_fallback());
        assert_eq!(dossier.id().to_string(), SAMPLE_STYLE_ID);
    }

    #[test]
    fn test_success_reports_source_name() {
        let id = EntityId::parse(SAMPLE_STYLE_ID).unwrap();
        let (_, origin) = load_with_fallback(&MockSource, &id);
        assert_eq!(origin, Origin::Source("sample".to_string()));
    }
}
