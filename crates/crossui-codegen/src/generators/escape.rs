//! Escaping of interpolated values for each target grammar.
//!
//! Generators only call the string escapes when
//! [`RenderOptions::escape`](super::RenderOptions) is set; the default output
//! interpolates values untouched. Manifests and type names are always sanitized.

use std::borrow::Cow;
use std::fmt::Write;

use convert_case::{Case, Casing};

/// Escape a value placed inside a double-quoted Swift string literal.
pub fn swift_string(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a value placed inside a double-quoted XML attribute.
///
/// A leading `{` would start a XAML markup extension, so it is guarded with the
/// `{}` escape sequence.
pub fn xml_attribute(value: &str) -> Cow<'_, str> {
    let needs_guard = value.starts_with('{');
    if !needs_guard && !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    if needs_guard {
        out.push_str("{}");
    }
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a path placed inside a `{Binding ...}` markup extension.
pub fn xaml_binding_path(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'', '{', '}', ',']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '{' | '}' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Quote `value` as a TOML basic string.
pub fn toml_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// A type name derived from an app name: kept when already an identifier,
/// otherwise PascalCased with every other character treated as a word break.
pub fn type_identifier(name: &str) -> Cow<'_, str> {
    let is_identifier = name.starts_with(|c: char| c.is_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    if is_identifier {
        return Cow::Borrowed(name);
    }

    let words: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let cased = words.to_case(Case::Pascal);
    if cased.starts_with(char::is_alphabetic) {
        Cow::Owned(cased)
    } else {
        Cow::Owned(format!("_{cased}"))
    }
}
