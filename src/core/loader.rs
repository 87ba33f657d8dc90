//! Style loading and saving helpers
//!
//! Bulk reads skip files that fail to parse, logging each one, so a single
//! broken dossier does not hide the rest of the workspace.

use std::path::PathBuf;

use crate::core::project::Project;
use crate::entities::StyleDossier;
use crate::yaml::{parse_yaml_file, write_yaml_file, YamlError};

/// Load every style in the workspace, sorted by file name
pub fn load_all(project: &Project) -> Vec<StyleDossier> {
    project
        .iter_style_files()
        .filter_map(|path| match parse_yaml_file::<StyleDossier>(&path) {
            Ok(dossier) => Some(dossier),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable style");
                None
            }
        })
        .collect()
}

/// Write a dossier to `styles/<ID>.plm.yaml`, returning the path
pub fn save(project: &Project, dossier: &StyleDossier) -> Result<PathBuf, YamlError> {
    std::fs::create_dir_all(project.styles_dir())?;
    let path = project.style_path(dossier.id());
    write_yaml_file(&path, dossier)?;
    tracing::info!(style = %dossier.id(), path = %path.display(), "saved style");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityId;
    use crate::entities::Style;
    use tempfile::tempdir;

    #[test]
    fn test_load_all_empty_workspace() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();
        assert!(load_all(&project).is_empty());
    }

    #[test]
    fn test_load_all_skips_broken_files() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();

        let id = EntityId::parse("STYLE-GOOD").unwrap();
        save(&project, &StyleDossier::new(Style::new(id, "Good"))).unwrap();
        std::fs::write(project.styles_dir().join("STYLE-BAD.plm.yaml"), "style: [unclosed\n").unwrap();

        let styles = load_all(&project);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].style.title, "Good");
    }

    #[test]
    fn test_save_uses_style_path() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();
        let id = EntityId::parse("STYLE-X").unwrap();

        let path = save(&project, &StyleDossier::new(Style::new(id.clone(), "X"))).unwrap();
        assert_eq!(path, project.style_path(&id));
        assert!(path.exists());
    }
}
