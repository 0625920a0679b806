use anyhow::{Context, Result};
use crossui_codegen::{render_with, RenderOptions, RootWrapper, ViewDocument};
use crossui_core::Platform;
use std::path::Path;
use tracing::debug;

/// Render the document at `file`, optionally wrapped as an application root.
pub fn render_document(
    file: &Path,
    platform: Platform,
    root: bool,
    options: RenderOptions,
    app_name: &str,
) -> Result<String> {
    let document = ViewDocument::load(file)
        .with_context(|| format!("Failed to load view document {}", file.display()))?;
    let view = document.to_view()?;
    debug!(%platform, nodes = view.node_count(), root, "rendering document");

    Ok(if root {
        RootWrapper::new(app_name)
            .with_options(options)
            .render(&view, platform)
    } else {
        render_with(&view, platform, options)
    })
}

pub fn execute(
    file: &Path,
    platform: Platform,
    root: bool,
    options: RenderOptions,
    app_name: &str,
) -> Result<()> {
    let output = render_document(file, platform, root, options, app_name)?;
    println!("{}", output);
    Ok(())
}
