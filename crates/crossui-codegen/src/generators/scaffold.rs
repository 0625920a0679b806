//! Scaffold generator for new CrossUI projects.

use crossui_core::Platform;
use serde_json::json;
use tracing::debug;

use super::templates::TemplateEngine;
use super::{GeneratedFile, GeneratedProject};
use crate::document::{ViewDocument, ViewSpec};
use crate::error::Result;

/// Default location of the entry view document inside a project.
pub const DEFAULT_ENTRY: &str = "views/ContentView.json";

/// Options for scaffold generation.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project (and application) name.
    pub name: String,
    /// Platforms listed in the generated manifest.
    pub platforms: Vec<Platform>,
}

impl ScaffoldOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platforms: Platform::ALL.to_vec(),
        }
    }
}

/// Generates the files of a fresh project directory.
pub struct ScaffoldGenerator<'a> {
    options: ScaffoldOptions,
    engine: TemplateEngine<'a>,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a new scaffold generator.
    pub fn new(options: ScaffoldOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(
            "manifest",
            r#"[project]
name = {{toml_string name}}
entry = {{toml_string entry}}

[build]
output_dir = "."
platforms = [{{#each platforms}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}]
escape = false
"#,
        )?;
        Ok(Self { options, engine })
    }

    /// Generate the project files, with paths relative to the project's parent directory.
    pub fn generate(&self) -> Result<GeneratedProject> {
        let name = &self.options.name;
        let platforms: Vec<&str> = self.options.platforms.iter().map(Platform::as_str).collect();

        let manifest = self.engine.render(
            "manifest",
            &json!({ "name": name, "entry": DEFAULT_ENTRY, "platforms": platforms }),
        )?;

        let starter = serde_json::to_string_pretty(&Self::starter_document())?;

        debug!(project = %name, "scaffolding project");
        Ok(GeneratedProject {
            files: vec![
                GeneratedFile {
                    path: format!("{name}/crossui.toml"),
                    content: manifest,
                    is_scaffold: true,
                },
                GeneratedFile {
                    path: format!("{name}/{DEFAULT_ENTRY}"),
                    content: starter + "\n",
                    is_scaffold: true,
                },
            ],
        })
    }

    /// The content view every new project starts from.
    fn starter_document() -> ViewDocument {
        ViewDocument {
            state: [("name".to_string(), String::new())].into_iter().collect(),
            root: ViewSpec::VStack {
                children: vec![
                    ViewSpec::Text {
                        content: "Hello, CrossUI!".to_string(),
                        binding: None,
                    },
                    ViewSpec::Text {
                        content: "This is your main content view.".to_string(),
                        binding: None,
                    },
                    ViewSpec::TextField {
                        title: "Your name".to_string(),
                        binding: Some("name".to_string()),
                        value: String::new(),
                    },
                ],
            },
        }
    }
}
