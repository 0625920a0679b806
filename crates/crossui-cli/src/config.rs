use anyhow::{Context, Result};
use crossui_codegen::{RenderOptions, DEFAULT_ENTRY};
use crossui_core::Platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILE: &str = "crossui.toml";

/// Project manifest (`crossui.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossUiConfig {
    /// Project settings
    pub project: ProjectConfig,
    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

/// Project settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Application name, used in generated type and file names
    pub name: String,

    /// Entry view document, relative to the manifest
    #[serde(default = "default_entry")]
    pub entry: PathBuf,
}

/// Build settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory that receives `Build/<platform>/`, relative to the manifest
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Platforms generated by `crossui build` without --platform
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    /// Escape interpolated text for each target grammar
    #[serde(default)]
    pub escape: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            platforms: default_platforms(),
            escape: false,
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from(DEFAULT_ENTRY)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_platforms() -> Vec<Platform> {
    Platform::ALL.to_vec()
}

/// A manifest together with the directory it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CrossUiConfig,
    pub base_dir: PathBuf,
}

impl CrossUiConfig {
    /// Manifest for a freshly named project with every default applied.
    pub fn default_for(name: impl Into<String>) -> Self {
        Self {
            project: ProjectConfig {
                name: name.into(),
                entry: default_entry(),
            },
            build: BuildConfig::default(),
        }
    }

    /// Parse manifest text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse manifest")
    }

    /// Load the manifest at `path`, or `./crossui.toml` when none is given.
    pub fn load(path: Option<PathBuf>) -> Result<LoadedConfig> {
        let path = path.unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;

        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(LoadedConfig { config, base_dir })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape: self.build.escape,
        }
    }
}

impl LoadedConfig {
    /// Entry view document path.
    pub fn entry_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.project.entry)
    }

    /// Directory that generated projects are written below.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.build.output_dir)
    }
}
