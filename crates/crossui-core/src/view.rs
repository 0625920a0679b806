//! View tree types.

use crate::builder::ViewBuilder;
use crate::state::Binding;
use crate::state_parser::{parse_state_variables, StateVariable};

/// A node in a UI description.
///
/// The same tree renders for every [`Platform`](crate::Platform); there are no
/// platform-specific node kinds.
#[derive(Debug, Clone)]
pub enum View {
    /// A text label.
    Text(String),
    /// A single-line text input bound to a string cell.
    TextField { text: Binding<String>, title: String },
    /// A vertical container; children render in declaration order.
    VStack(Vec<View>),
    /// Pre-rendered body text plus the state it declared.
    Description {
        description: String,
        state: Vec<StateVariable>,
    },
}

impl View {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// A label showing the binding's value at construction time.
    pub fn text_from(binding: &Binding<String>) -> Self {
        Self::Text(binding.get())
    }

    pub fn text_field(text: Binding<String>, title: impl Into<String>) -> Self {
        Self::TextField {
            text,
            title: title.into(),
        }
    }

    pub fn vstack(children: impl IntoIterator<Item = View>) -> Self {
        Self::VStack(ViewBuilder::build_block(children))
    }

    pub fn description(description: impl Into<String>, state: Vec<StateVariable>) -> Self {
        Self::Description {
            description: description.into(),
            state,
        }
    }

    /// A description whose state is scraped from `source`, one line at a time.
    pub fn description_from_source(description: impl Into<String>, source: &str) -> Self {
        Self::description(description, parse_state_variables(source))
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[View] {
        match self {
            Self::VStack(children) => children,
            _ => &[],
        }
    }

    /// Short kind name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::TextField { .. } => "TextField",
            Self::VStack(_) => "VStack",
            Self::Description { .. } => "Description",
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(View::node_count).sum::<usize>()
    }
}

/// A user-defined view whose content is described by another view tree.
///
/// Implementors typically own [`State`](crate::State) cells and hand out bindings
/// from `body`.
pub trait Component {
    fn body(&self) -> View;
}

impl Component for View {
    fn body(&self) -> View {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    struct ContentView {
        text: State<String>,
    }

    impl Component for ContentView {
        fn body(&self) -> View {
            View::vstack([
                View::text_from(&self.text.binding()),
                View::text_field(self.text.binding(), "Enter text"),
            ])
        }
    }

    #[test]
    fn test_vstack_preserves_order() {
        let stack = View::vstack([View::text("a"), View::text("b"), View::text("c")]);
        let labels: Vec<_> = stack
            .children()
            .iter()
            .map(|child| match child {
                View::Text(content) => content.as_str(),
                _ => panic!("Expected Text"),
            })
            .collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_vstack() {
        let stack = View::vstack([]);
        assert!(stack.children().is_empty());
        assert_eq!(stack.node_count(), 1);
    }

    #[test]
    fn test_component_body_uses_state() {
        let view = ContentView {
            text: State::new("Hello, World!".to_string()),
        };
        let body = view.body();
        assert_eq!(body.kind(), "VStack");
        assert_eq!(body.node_count(), 3);

        if let View::TextField { text, title } = &body.children()[1] {
            assert_eq!(title, "Enter text");
            text.set("changed".to_string());
        } else {
            panic!("Expected TextField");
        }
        assert_eq!(view.text.get(), "changed");
    }

    #[test]
    fn test_description_from_source() {
        let view = View::description_from_source(
            "Text(count)",
            "@State private var count = 0\nvar body: some View { Text(count) }",
        );
        match view {
            View::Description { description, state } => {
                assert_eq!(description, "Text(count)");
                assert_eq!(state.len(), 1);
                assert_eq!(state[0].name(), "count");
            }
            _ => panic!("Expected Description"),
        }
    }
}
