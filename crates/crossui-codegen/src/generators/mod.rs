//! Code generators for each target platform.

mod gtk;
mod project;
mod scaffold;
mod swiftui;
mod templates;
mod xaml;

pub mod escape;

pub use gtk::GtkGenerator;
pub use project::{BuildCommand, ProjectGenerator};
pub use scaffold::{ScaffoldGenerator, ScaffoldOptions, DEFAULT_ENTRY};
pub use swiftui::SwiftUIGenerator;
pub use templates::TemplateEngine;
pub use xaml::XamlGenerator;

use std::path::{Path, PathBuf};

use crossui_core::{Platform, View};
use tracing::debug;

use crate::error::Result;

/// Common trait for platform renderers.
///
/// `render` maps a node, and recursively its children, to a fragment of the target
/// syntax. It is pure: the same tree always yields the same text.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Platform this generator emits for.
    fn platform(&self) -> Platform;

    /// Render a view subtree to a fragment.
    fn render(&self, view: &View) -> String;

    /// Wrap an already rendered fragment in the top-level document for this target.
    fn wrap_root(&self, fragment: &str, app_name: &str) -> String;

    /// Render `view` and wrap it as the root of an application.
    fn render_root(&self, view: &View, app_name: &str) -> String {
        self.wrap_root(&self.render(view), app_name)
    }
}

/// Options shared by all generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape interpolated text for the target's string grammar.
    ///
    /// Off by default: values are inserted exactly as given, so a value containing
    /// the target's quote character produces broken output.
    pub escape: bool,
}

/// Generator for `platform`.
pub fn generator_for(platform: Platform, options: RenderOptions) -> Box<dyn CodeGenerator> {
    match platform {
        Platform::MacOS => Box::new(SwiftUIGenerator::with_options(options)),
        Platform::Windows => Box::new(XamlGenerator::with_options(options)),
        Platform::Linux => Box::new(GtkGenerator::with_options(options)),
    }
}

/// Render a view tree for `platform` with default options.
pub fn render(view: &View, platform: Platform) -> String {
    render_with(view, platform, RenderOptions::default())
}

/// Render a view tree for `platform`.
pub fn render_with(view: &View, platform: Platform, options: RenderOptions) -> String {
    match platform {
        Platform::MacOS => SwiftUIGenerator::with_options(options).render(view),
        Platform::Windows => XamlGenerator::with_options(options).render(view),
        Platform::Linux => GtkGenerator::with_options(options).render(view),
    }
}

/// Generated project output.
#[derive(Debug, Clone, Default)]
pub struct GeneratedProject {
    /// Generated files, in generation order.
    pub files: Vec<GeneratedFile>,
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File path relative to project root.
    pub path: String,
    /// File content.
    pub content: String,
    /// Whether this is boilerplate rather than rendered UI.
    pub is_scaffold: bool,
}

impl GeneratedProject {
    /// Look up a file by its relative path.
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Write every file below `root`, creating directories as needed.
    ///
    /// Returns the paths written.
    pub fn write_to(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let target = root.join(&file.path);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, &file.content)?;
            debug!(path = %target.display(), bytes = file.content.len(), "wrote file");
            written.push(target);
        }
        Ok(written)
    }
}
