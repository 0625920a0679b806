//! WinUI XAML code generator.

use std::borrow::Cow;

use crossui_core::{Platform, View};

use super::escape::{xaml_binding_path, xml_attribute};
use super::{CodeGenerator, RenderOptions};

const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml/presentation";
const XAML_X_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

/// XAML markup generator.
#[derive(Debug, Clone, Default)]
pub struct XamlGenerator {
    options: RenderOptions,
}

impl XamlGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    fn attribute<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.escape {
            xml_attribute(value)
        } else {
            value.into()
        }
    }

    fn binding_path<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.escape {
            xaml_binding_path(value)
        } else {
            value.into()
        }
    }
}

impl CodeGenerator for XamlGenerator {
    fn framework_name(&self) -> &'static str {
        "XAML"
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn render(&self, view: &View) -> String {
        match view {
            View::Text(content) => format!("<TextBlock Text=\"{}\" />", self.attribute(content)),
            View::TextField { text, title } => {
                let value = text.get();
                format!(
                    "<TextBox Text=\"{{Binding {}}}\" PlaceholderText=\"{}\" />",
                    self.binding_path(&value),
                    self.attribute(title)
                )
            }
            View::VStack(children) => {
                let body = children
                    .iter()
                    .map(|child| self.render(child))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<StackPanel Orientation=\"Vertical\">\n    {}\n</StackPanel>",
                    body
                )
            }
            // Markup has no state syntax; the description passes through untouched.
            View::Description { description, .. } => description.clone(),
        }
    }

    fn wrap_root(&self, fragment: &str, _app_name: &str) -> String {
        format!(
            r#"<Page
    x:Class="MainPage"
    xmlns="{XAML_NAMESPACE}"
    xmlns:x="{XAML_X_NAMESPACE}"
    mc:Ignorable="d">
    <Grid>
        {fragment}
    </Grid>
</Page>
"#
        )
    }
}
