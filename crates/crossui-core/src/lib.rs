//! Core types for CrossUI.
//!
//! This crate holds everything that is independent of a target UI technology:
//! - the [`View`] tree and the [`ViewBuilder`] composer
//! - reactive [`State`] cells and their [`Binding`]s
//! - the [`Platform`] selector
//! - recovery of `@State` declarations from source text ([`StateVariable`])

pub mod builder;
pub mod errors;
pub mod state;
pub mod state_parser;
pub mod types;
pub mod view;

pub use builder::*;
pub use errors::*;
pub use state::*;
pub use state_parser::*;
pub use types::*;
pub use view::*;
