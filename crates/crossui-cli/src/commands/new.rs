use anyhow::{bail, Context, Result};
use crossui_codegen::{ScaffoldGenerator, ScaffoldOptions};
use crossui_core::Platform;
use std::path::{Path, PathBuf};
use tracing::info;

/// Scaffold `<parent>/<name>/` and return the project directory.
pub fn execute(parent: &Path, name: &str, platforms: Vec<Platform>) -> Result<PathBuf> {
    let project_dir = parent.join(name);
    if project_dir.exists() {
        bail!("{} already exists", project_dir.display());
    }

    let mut options = ScaffoldOptions::new(name);
    if !platforms.is_empty() {
        options.platforms = platforms;
    }

    let project = ScaffoldGenerator::new(options)?.generate()?;
    project
        .write_to(parent)
        .with_context(|| format!("Failed to write project {}", project_dir.display()))?;

    info!(project = name, dir = %project_dir.display(), "created project");
    println!("New CrossUI project created at {}", project_dir.display());
    Ok(project_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CrossUiConfig, MANIFEST_FILE};

    #[test]
    fn test_new_project_loads_as_config() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = execute(dir.path(), "Hello", vec![Platform::MacOS]).unwrap();

        let loaded = CrossUiConfig::load(Some(project_dir.join(MANIFEST_FILE))).unwrap();
        assert_eq!(loaded.config.project.name, "Hello");
        assert_eq!(loaded.config.build.platforms, vec![Platform::MacOS]);
        assert!(loaded.entry_path().is_file());
    }

    #[test]
    fn test_name_with_quote_and_backslash_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let name = r#"Say "Hi" \ now"#;
        let project_dir = execute(dir.path(), name, Vec::new()).unwrap();

        let loaded = CrossUiConfig::load(Some(project_dir.join(MANIFEST_FILE))).unwrap();
        assert_eq!(loaded.config.project.name, name);

        let written = crate::commands::build::execute(&loaded, &[Platform::MacOS]).unwrap();
        let ui = std::fs::read_to_string(&written[0]).unwrap();
        assert!(ui.contains("struct SayHiNowApp: App {"));
    }

    #[test]
    fn test_existing_directory_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Taken")).unwrap();
        let err = execute(dir.path(), "Taken", Vec::new()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
