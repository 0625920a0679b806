//! Top-level document wrapping.

use crossui_core::{Platform, View};
use tracing::trace;

use crate::generators::{generator_for, RenderOptions};

/// App name used when none is given.
pub const DEFAULT_APP_NAME: &str = "CrossUI";

/// Wraps rendered fragments in each platform's application boilerplate.
#[derive(Debug, Clone)]
pub struct RootWrapper {
    app_name: String,
    options: RenderOptions,
}

impl RootWrapper {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Wrap an already rendered fragment.
    pub fn wrap(&self, fragment: &str, platform: Platform) -> String {
        generator_for(platform, self.options).wrap_root(fragment, &self.app_name)
    }

    /// Render `view` for `platform` and wrap it.
    pub fn render(&self, view: &View, platform: Platform) -> String {
        trace!(%platform, root = view.kind(), "rendering root");
        generator_for(platform, self.options).render_root(view, &self.app_name)
    }
}

impl Default for RootWrapper {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME)
    }
}

/// Wrap `fragment` in the top-level document for `platform`.
pub fn wrap_root(fragment: &str, platform: Platform) -> String {
    RootWrapper::default().wrap(fragment, platform)
}
