//! SwiftUI code generator.

use crossui_core::{Platform, View};

use super::escape::{swift_string, type_identifier};
use super::{CodeGenerator, RenderOptions};

/// SwiftUI code generator.
#[derive(Debug, Clone, Default)]
pub struct SwiftUIGenerator {
    options: RenderOptions,
}

impl SwiftUIGenerator {
    /// Create a new SwiftUI generator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    fn literal<'v>(&self, value: &'v str) -> std::borrow::Cow<'v, str> {
        if self.options.escape {
            swift_string(value)
        } else {
            value.into()
        }
    }

    /// `VStack { ... }` with children joined by newlines.
    fn generate_stack(&self, children: &[View]) -> String {
        let body = children
            .iter()
            .map(|child| self.render(child))
            .collect::<Vec<_>>()
            .join("\n");
        format!("VStack {{\n    {}\n}}", body)
    }

    /// A `ContentView` struct that re-declares the parsed state ahead of the body.
    fn generate_description(&self, description: &str, declarations: &[String]) -> String {
        format!(
            "struct ContentView: View {{\n    {}\n\n    var body: some View {{\n        {}\n    }}\n}}",
            declarations.join("\n    "),
            description
        )
    }

    /// Main app file around a top-level declaration.
    fn generate_app(&self, declaration: &str, app_name: &str) -> String {
        let app_type = type_identifier(app_name);
        format!(
            r#"import SwiftUI

{declaration}

@main
struct {app_type}App: App {{
    var body: some Scene {{
        WindowGroup {{
            ContentView()
        }}
    }}
}}
"#
        )
    }
}

impl CodeGenerator for SwiftUIGenerator {
    fn framework_name(&self) -> &'static str {
        "SwiftUI"
    }

    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn render(&self, view: &View) -> String {
        match view {
            View::Text(content) => format!("Text(\"{}\")", self.literal(content)),
            View::TextField { text, title } => {
                format!("TextField(\"{}\", text: {})", self.literal(title), text.get())
            }
            View::VStack(children) => self.generate_stack(children),
            View::Description { description, state } => {
                let declarations: Vec<String> = state
                    .iter()
                    .map(|var| var.declaration_for(Platform::MacOS).to_string())
                    .collect();
                self.generate_description(description, &declarations)
            }
        }
    }

    fn wrap_root(&self, fragment: &str, app_name: &str) -> String {
        let content_view = format!(
            "struct ContentView: View {{\n    var body: some View {{\n        {}\n    }}\n}}",
            fragment
        );
        self.generate_app(&content_view, app_name)
    }

    fn render_root(&self, view: &View, app_name: &str) -> String {
        // A description already renders its own ContentView.
        match view {
            View::Description { .. } => self.generate_app(&self.render(view), app_name),
            _ => self.wrap_root(&self.render(view), app_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossui_core::{Binding, StateVariable};

    #[test]
    fn test_generate_text() {
        let gen = SwiftUIGenerator::new();
        assert_eq!(gen.render(&View::text("Hello")), "Text(\"Hello\")");
    }

    #[test]
    fn test_generate_text_field_uses_binding_value() {
        let gen = SwiftUIGenerator::new();
        let field = View::text_field(Binding::of("name".to_string()), "Enter text");
        assert_eq!(gen.render(&field), "TextField(\"Enter text\", text: name)");
    }

    #[test]
    fn test_generate_stack() {
        let gen = SwiftUIGenerator::new();
        let stack = View::vstack([View::text("a"), View::text("b")]);
        assert_eq!(gen.render(&stack), "VStack {\n    Text(\"a\")\nText(\"b\")\n}");
    }

    #[test]
    fn test_description_reemits_declarations_verbatim() {
        let gen = SwiftUIGenerator::new();
        let line = "@State private var count = 0";
        let state = vec![StateVariable::parse(line).unwrap()];
        let out = gen.render(&View::description("Text(\"\\(count)\")", state));

        assert_eq!(
            out,
            "struct ContentView: View {\n    @State private var count = 0\n\n    var body: some View {\n        Text(\"\\(count)\")\n    }\n}"
        );
        assert!(out.lines().any(|l| l.trim() == line));
    }

    #[test]
    fn test_description_keeps_declaration_order() {
        let gen = SwiftUIGenerator::new();
        let state = vec![
            StateVariable::parse("@State var a = 1").unwrap(),
            StateVariable::parse("@State var b = 2").unwrap(),
        ];
        let out = gen.render(&View::description("EmptyView()", state));
        assert!(out.contains("    @State var a = 1\n    @State var b = 2\n"));
    }

    #[test]
    fn test_wrap_root() {
        let gen = SwiftUIGenerator::new();
        let out = gen.render_root(&View::text("Hi"), "Demo");
        assert!(out.starts_with("import SwiftUI\n"));
        assert!(out.contains("    var body: some View {\n        Text(\"Hi\")\n    }"));
        assert!(out.contains("@main\nstruct DemoApp: App {"));
        assert!(out.contains("WindowGroup {\n            ContentView()\n        }"));
    }

    #[test]
    fn test_app_struct_name_is_an_identifier() {
        let gen = SwiftUIGenerator::new();
        let out = gen.render_root(&View::text("Hi"), "my app");
        assert!(out.contains("struct MyAppApp: App {"));
        assert!(gen.render_root(&View::text("Hi"), "CrossUI").contains("struct CrossUIApp: App {"));
    }

    #[test]
    fn test_description_root_is_not_nested() {
        let gen = SwiftUIGenerator::new();
        let out = gen.render_root(&View::description("Text(\"x\")", vec![]), "Demo");
        assert_eq!(out.matches("struct ContentView").count(), 1);
    }

    #[test]
    fn test_escaping_is_opt_in() {
        let view = View::text("say \"hi\"");
        assert_eq!(SwiftUIGenerator::new().render(&view), "Text(\"say \"hi\"\")");
        let gen = SwiftUIGenerator::with_options(RenderOptions { escape: true });
        assert_eq!(gen.render(&view), "Text(\"say \\\"hi\\\"\")");
    }
}
