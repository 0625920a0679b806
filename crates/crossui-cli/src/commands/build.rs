use anyhow::{Context, Result};
use crossui_codegen::{ProjectGenerator, ViewDocument};
use crossui_core::Platform;
use std::path::PathBuf;
use tracing::info;

use crate::config::LoadedConfig;

/// Generate project files for `platforms`, returning every path written.
pub fn execute(loaded: &LoadedConfig, platforms: &[Platform]) -> Result<Vec<PathBuf>> {
    let entry = loaded.entry_path();
    let document = ViewDocument::load(&entry)
        .with_context(|| format!("Failed to load entry view {}", entry.display()))?;
    let root = document.to_view()?;

    let app_name = &loaded.config.project.name;
    let generator = ProjectGenerator::new(loaded.config.render_options())?;
    let output_dir = loaded.output_dir();

    let mut written = Vec::new();
    for &platform in platforms {
        let project = generator.generate(app_name, &root, platform)?;
        let paths = project
            .write_to(&output_dir)
            .with_context(|| format!("Failed to write {} project", platform))?;
        info!(%platform, files = paths.len(), "wrote project");
        println!(
            "Generated {} project ({}) in {}",
            platform.framework(),
            paths.len(),
            output_dir.join("Build").join(platform.build_dir()).display()
        );
        written.extend(paths);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::new;
    use crate::config::{CrossUiConfig, MANIFEST_FILE};

    #[test]
    fn test_build_scaffolded_project() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = new::execute(dir.path(), "Hello", Vec::new()).unwrap();
        let loaded = CrossUiConfig::load(Some(project_dir.join(MANIFEST_FILE))).unwrap();

        let written = execute(&loaded, &loaded.config.build.platforms).unwrap();
        assert_eq!(written.len(), 3 + 5 + 2);

        let page =
            std::fs::read_to_string(project_dir.join("Build/windows/MainPage.xaml")).unwrap();
        assert!(page.contains("<TextBlock Text=\"Hello, CrossUI!\" />"));
        assert!(project_dir.join("Build/macOS/Hello.xcodeproj/project.pbxproj").is_file());
        assert!(project_dir.join("Build/linux/Makefile").is_file());
    }

    #[test]
    fn test_build_single_platform() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = new::execute(dir.path(), "Solo", Vec::new()).unwrap();
        let loaded = CrossUiConfig::load(Some(project_dir.join(MANIFEST_FILE))).unwrap();

        let written = execute(&loaded, &[Platform::Linux]).unwrap();
        assert_eq!(written.len(), 2);
        assert!(!project_dir.join("Build/macOS").exists());
    }
}
