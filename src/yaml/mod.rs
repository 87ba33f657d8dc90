//! YAML file reading and writing

pub mod diagnostics;

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

pub use diagnostics::{YamlError, YamlSyntaxError};

/// Parse YAML text, reporting errors against `filename`
pub fn parse_yaml_str<T: DeserializeOwned>(source: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(source)
        .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename).into())
}

/// Read and parse a YAML file
pub fn parse_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let source = fs::read_to_string(path)?;
    parse_yaml_str(&source, &path.display().to_string())
}

/// Serialize a value and write it to `path`
pub fn write_yaml_file<T: Serialize>(path: &Path, value: &T) -> Result<(), YamlError> {
    let yaml = serde_yml::to_string(value).map_err(|e| YamlError::Serialize(e.to_string()))?;
    fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StyleDossier;
    use tempfile::tempdir;

    #[test]
    fn test_parse_error_carries_message() {
        let err = parse_yaml_str::<StyleDossier>("style:\n  title: No id\n", "x.plm.yaml")
            .unwrap_err();
        match err {
            YamlError::Syntax(e) => assert!(e.message().contains("id")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.plm.yaml");
        let dossier = crate::entities::defaults::sample_dossier();

        write_yaml_file(&path, &dossier).unwrap();
        let back: StyleDossier = parse_yaml_file(&path).unwrap();
        assert_eq!(back.style.title, "SS25 Crew Tee");
        assert_eq!(back.operations.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_yaml_file::<StyleDossier>(Path::new("/nonexistent/a.plm.yaml")).unwrap_err();
        assert!(matches!(err, YamlError::Io(_)));
    }
}
