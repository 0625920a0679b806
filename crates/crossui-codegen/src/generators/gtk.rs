//! GTK-style imperative description generator.

use std::borrow::Cow;

use crossui_core::{Platform, View};

use super::escape::swift_string;
use super::{CodeGenerator, RenderOptions};

/// GTK description generator.
#[derive(Debug, Clone, Default)]
pub struct GtkGenerator {
    options: RenderOptions,
}

impl GtkGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    fn literal<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.escape {
            swift_string(value)
        } else {
            value.into()
        }
    }
}

impl CodeGenerator for GtkGenerator {
    fn framework_name(&self) -> &'static str {
        "GTK"
    }

    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn render(&self, view: &View) -> String {
        match view {
            View::Text(content) => format!("Label(\"{}\")", self.literal(content)),
            View::TextField { text, title } => {
                let value = text.get();
                format!(
                    "Entry(text: \"{}\", placeholder: \"{}\")",
                    self.literal(&value),
                    self.literal(title)
                )
            }
            // Children are comma-separated here, unlike the other two targets.
            View::VStack(children) => {
                let body = children
                    .iter()
                    .map(|child| self.render(child))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("GtkVBox {{\n    {}\n}}", body)
            }
            View::Description { description, .. } => description.clone(),
        }
    }

    /// The description is stored in a string constant and printed by a small runner.
    fn wrap_root(&self, fragment: &str, _app_name: &str) -> String {
        format!(
            r#"import Glibc

let content = "{}"
print("Running Linux UI: \(content)")
"#,
            self.literal(fragment)
        )
    }
}
