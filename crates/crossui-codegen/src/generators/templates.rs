//! Template engine for project boilerplate.

use crate::error::{CodegenError, Result};
use convert_case::{Case, Casing};
use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde::Serialize;

use super::escape::{toml_string, type_identifier, xml_attribute};

/// Template engine using Handlebars.
///
/// Output is not HTML-escaped; templates that emit XML call the `xml` helper on
/// interpolated values explicitly.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Whether a template is registered under `name`.
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register the string conversion helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper("type_name", string_helper(|s| type_identifier(s).into_owned()));
        handlebars.register_helper("snake_case", string_helper(to_snake_case));
        handlebars.register_helper("xml", string_helper(|s| xml_attribute(s).into_owned()));
        handlebars.register_helper("toml_string", string_helper(toml_string));
    }
}

/// Helper that writes `convert(first param)`, treating a missing or non-string param as "".
fn string_helper(convert: fn(&str) -> String) -> Box<dyn HelperDef + Send + Sync> {
    Box::new(
        move |h: &Helper,
              _r: &Handlebars,
              _ctx: &Context,
              _rc: &mut RenderContext,
              out: &mut dyn Output|
              -> HelperResult {
            let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
            out.write(&convert(param))?;
            Ok(())
        },
    )
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}
