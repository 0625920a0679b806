//! Serialized view trees.
//!
//! A view document is JSON describing a tree of views plus the named string cells
//! its text fields bind to:
//!
//! ```json
//! {
//!   "state": { "name": "Ada" },
//!   "root": {
//!     "type": "vstack",
//!     "children": [
//!       { "type": "text", "content": "Hello" },
//!       { "type": "text_field", "title": "Name", "binding": "name" }
//!     ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crossui_core::{parse_state_variables, Binding, StateVariable, View};
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// A view tree together with its state cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDocument {
    /// Initial values of named string cells.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state: BTreeMap<String, String>,
    /// Root of the tree.
    pub root: ViewSpec,
}

/// Serialized form of a [`View`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewSpec {
    /// Label with literal content, or the value of a named cell.
    Text {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binding: Option<String>,
    },
    /// Text input bound to a named cell, or to a private cell holding `value`.
    TextField {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binding: Option<String>,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        value: String,
    },
    #[serde(rename = "vstack")]
    VStack {
        #[serde(default)]
        children: Vec<ViewSpec>,
    },
    /// Raw SwiftUI source. `@State` lines in `source` become declared state; `body`
    /// is the description text, defaulting to the non-declaration lines of `source`.
    Description {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
}

impl ViewDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the view tree. Every reference to the same state name shares one cell.
    pub fn to_view(&self) -> Result<View> {
        let cells: BTreeMap<&str, Binding<String>> = self
            .state
            .iter()
            .map(|(name, value)| (name.as_str(), Binding::of(value.clone())))
            .collect();
        build(&self.root, &cells)
    }
}

fn lookup(cells: &BTreeMap<&str, Binding<String>>, name: &str, node: &str) -> Result<Binding<String>> {
    cells
        .get(name)
        .cloned()
        .ok_or_else(|| CodegenError::UnknownState {
            name: name.to_string(),
            node: node.to_string(),
        })
}

fn build(spec: &ViewSpec, cells: &BTreeMap<&str, Binding<String>>) -> Result<View> {
    Ok(match spec {
        ViewSpec::Text { content, binding } => match binding {
            Some(_) if !content.is_empty() => {
                return Err(CodegenError::InvalidDocument(
                    "text sets both binding and content".to_string(),
                ))
            }
            Some(name) => View::text_from(&lookup(cells, name, "text")?),
            None => View::text(content.as_str()),
        },
        ViewSpec::TextField {
            title,
            binding,
            value,
        } => {
            let binding = match binding {
                Some(_) if !value.is_empty() => {
                    return Err(CodegenError::InvalidDocument(format!(
                        "text_field '{title}' sets both binding and value"
                    )))
                }
                Some(name) => lookup(cells, name, "text_field")?,
                None => Binding::of(value.clone()),
            };
            View::text_field(binding, title.as_str())
        }
        ViewSpec::VStack { children } => View::vstack(
            children
                .iter()
                .map(|child| build(child, cells))
                .collect::<Result<Vec<_>>>()?,
        ),
        ViewSpec::Description { source, body } => {
            let state = parse_state_variables(source);
            let description = match body {
                Some(body) => body.clone(),
                None => strip_declarations(source),
            };
            View::description(description, state)
        }
    })
}

/// `source` without its `@State` lines, trimmed.
fn strip_declarations(source: &str) -> String {
    source
        .lines()
        .filter(|line| StateVariable::parse(line).is_none())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::render;
    use crossui_core::Platform;

    #[test]
    fn test_parse_and_build() {
        let doc = ViewDocument::from_json(
            r#"{
                "state": { "name": "Ada" },
                "root": {
                    "type": "vstack",
                    "children": [
                        { "type": "text", "content": "Hello" },
                        { "type": "text", "binding": "name" },
                        { "type": "text_field", "title": "Name", "binding": "name" }
                    ]
                }
            }"#,
        )
        .unwrap();

        let view = doc.to_view().unwrap();
        assert_eq!(
            render(&view, Platform::Linux),
            "GtkVBox {\n    Label(\"Hello\"), Label(\"Ada\"), Entry(text: \"Ada\", placeholder: \"Name\")\n}"
        );
    }

    #[test]
    fn test_fields_bound_to_same_name_share_a_cell() {
        let doc = ViewDocument {
            state: [("q".to_string(), "one".to_string())].into_iter().collect(),
            root: ViewSpec::VStack {
                children: vec![
                    ViewSpec::TextField {
                        title: "A".to_string(),
                        binding: Some("q".to_string()),
                        value: String::new(),
                    },
                    ViewSpec::TextField {
                        title: "B".to_string(),
                        binding: Some("q".to_string()),
                        value: String::new(),
                    },
                ],
            },
        };

        let view = doc.to_view().unwrap();
        if let View::TextField { text, .. } = &view.children()[0] {
            text.set("two".to_string());
        }
        assert!(matches!(&view.children()[1], View::TextField { text, .. } if text.get() == "two"));
    }

    #[test]
    fn test_unknown_binding_is_rejected() {
        let doc = ViewDocument::from_json(
            r#"{ "root": { "type": "text_field", "title": "T", "binding": "missing" } }"#,
        )
        .unwrap();
        let err = doc.to_view().unwrap_err();
        assert!(matches!(err, CodegenError::UnknownState { ref name, .. } if name == "missing"));
    }

    #[test]
    fn test_binding_and_value_conflict() {
        let doc = ViewDocument::from_json(
            r#"{ "state": { "q": "" },
                 "root": { "type": "text_field", "title": "T", "binding": "q", "value": "x" } }"#,
        )
        .unwrap();
        let err = doc.to_view().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidDocument(_)));
    }

    #[test]
    fn test_text_binding_and_content_conflict() {
        let doc = ViewDocument::from_json(
            r#"{ "state": { "q": "" },
                 "root": { "type": "text", "content": "Hi", "binding": "q" } }"#,
        )
        .unwrap();
        let err = doc.to_view().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidDocument(_)));
    }

    #[test]
    fn test_unknown_node_type_is_json_error() {
        let err = ViewDocument::from_json(r#"{ "root": { "type": "button" } }"#).unwrap_err();
        assert!(matches!(err, CodegenError::Json(_)));
    }

    #[test]
    fn test_description_scrapes_state() {
        let doc = ViewDocument::from_json(
            r#"{ "root": { "type": "description",
                 "source": "@State private var count = 0\nText(\"\\(count)\")" } }"#,
        )
        .unwrap();

        let view = doc.to_view().unwrap();
        match &view {
            View::Description { description, state } => {
                assert_eq!(description, "Text(\"\\(count)\")");
                assert_eq!(state.len(), 1);
                assert_eq!(state[0].declaration(), "@State private var count = 0");
            }
            _ => panic!("Expected Description"),
        }
        assert!(render(&view, Platform::MacOS).contains("    @State private var count = 0\n"));
        assert_eq!(render(&view, Platform::Windows), "Text(\"\\(count)\")");
    }

    #[test]
    fn test_serialize_round_trip() {
        let doc = ViewDocument {
            state: BTreeMap::new(),
            root: ViewSpec::Text {
                content: "Hi".to_string(),
                binding: None,
            },
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"root":{"type":"text","content":"Hi"}}"#);
        assert_eq!(ViewDocument::from_json(&json).unwrap(), doc);
    }
}
