//! Error types for the CrossUI core.

use thiserror::Error;

/// Errors raised while constructing core values.
///
/// Rendering and state-declaration parsing never fail; the only fallible step is
/// turning external input (a platform name) into a typed value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown platform: {name}")]
    UnknownPlatform { name: String },
}
