//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while generating or building a project.
///
/// Rendering a view tree never fails; these cover templates, documents, the file
/// system and native build tools.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Invalid view document.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A document references a state cell it never declared.
    #[error("Unknown state '{name}' referenced by {node}")]
    UnknownState { name: String, node: String },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Native build tool could not be started.
    #[error("Failed to launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Native build tool exited unsuccessfully.
    #[error("{tool} failed{}", .code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    BuildFailed { tool: String, code: Option<i32> },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
