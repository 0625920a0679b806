//! Code generation from CrossUI view trees to native UI sources.
//!
//! One view tree renders for three targets:
//!
//! - SwiftUI declarative source (macOS)
//! - WinUI XAML markup (Windows)
//! - a GTK-style imperative description (Linux)
//!
//! # Example
//!
//! ```
//! use crossui_codegen::{render, wrap_root};
//! use crossui_core::{Binding, Platform, View};
//!
//! let view = View::vstack([
//!     View::text("Hello"),
//!     View::text_field(Binding::of("world".to_string()), "Name"),
//! ]);
//! let page = wrap_root(&render(&view, Platform::Windows), Platform::Windows);
//! assert!(page.contains("PlaceholderText=\"Name\""));
//! ```

pub mod document;
pub mod error;
pub mod generators;
pub mod root;

pub use document::{ViewDocument, ViewSpec};
pub use error::{CodegenError, Result};
pub use generators::{
    generator_for, render, render_with, BuildCommand, CodeGenerator, GeneratedFile,
    GeneratedProject, GtkGenerator, ProjectGenerator, RenderOptions, ScaffoldGenerator,
    ScaffoldOptions, SwiftUIGenerator, TemplateEngine, XamlGenerator, DEFAULT_ENTRY,
};
pub use root::{wrap_root, RootWrapper, DEFAULT_APP_NAME};
