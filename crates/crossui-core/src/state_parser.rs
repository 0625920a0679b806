//! Recovery of `@State` declarations from SwiftUI source text.
//!
//! This is line scraping, not parsing: a single line is matched against
//!
//! ```text
//! @State <ws> [private <ws>] var <ws> <ident> [: <type>] [= <initial value>]
//! ```
//!
//! starting at the leftmost `@State` in the line that fits the grammar. Declarations
//! spanning several lines are not recognised.

use nom::{
    bytes::complete::{tag, take_till1, take_while, take_while1},
    character::complete::char,
    combinator::opt,
    sequence::terminated,
    IResult,
};

use crate::types::Platform;

/// Type recorded when a declaration has no annotation.
pub const DEFAULT_TYPE: &str = "Any";

/// A state variable recovered from a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVariable {
    declaration: String,
    is_private: bool,
    name: String,
    type_name: String,
    initial_value: Option<String>,
}

impl StateVariable {
    /// Match a single source line. Returns `None` when the line holds no declaration.
    pub fn parse(line: &str) -> Option<Self> {
        let parts = line
            .match_indices("@State")
            .find_map(|(start, _)| declaration(&line[start..]).ok())
            .map(|(_, parts)| parts)?;

        Some(Self {
            declaration: line.to_string(),
            is_private: parts.is_private,
            name: parts.name.to_string(),
            type_name: parts
                .type_name
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            initial_value: parts.initial_value.map(str::to_string),
        })
    }

    /// The full source line the variable was parsed from.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annotated type, or [`DEFAULT_TYPE`].
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Initializer expression as written, if any.
    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    /// The state declaration line to emit for `platform`.
    ///
    /// SwiftUI shares the source syntax, so the original line is reused verbatim.
    /// The other targets have no state translation and get a comment marker.
    pub fn declaration_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::MacOS => &self.declaration,
            Platform::Windows => "// TODO: Implement WinUI state",
            Platform::Linux => "// Linux state management not implemented",
        }
    }
}

/// Scan a source buffer line by line, collecting every declaration in order.
pub fn parse_state_variables(source: &str) -> Vec<StateVariable> {
    source.lines().filter_map(StateVariable::parse).collect()
}

struct DeclarationParts<'a> {
    is_private: bool,
    name: &'a str,
    type_name: Option<&'a str>,
    initial_value: Option<&'a str>,
}

fn ws0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn ws1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// `: Type`, running up to the next `=` or the end of the line.
fn type_annotation(input: &str) -> IResult<&str, &str> {
    let (input, _) = ws0(input)?;
    let (input, _) = char(':')(input)?;
    let (input, ty) = take_till1(|c: char| c == '=')(input)?;
    Ok((input, ty.trim()))
}

/// `= value`, running to the end of the line.
fn initial_value(input: &str) -> IResult<&str, &str> {
    let (input, _) = ws0(input)?;
    let (input, _) = char('=')(input)?;
    let (input, _) = ws0(input)?;
    // A blank initializer fails here, so `x = ` parses with no initial value.
    take_till1(|c: char| c == '\n' || c == '\r')(input)
}

fn declaration(input: &str) -> IResult<&str, DeclarationParts<'_>> {
    let (input, _) = tag("@State")(input)?;
    let (input, _) = ws1(input)?;
    let (input, private) = opt(terminated(tag("private"), ws1))(input)?;
    let (input, _) = tag("var")(input)?;
    let (input, _) = ws1(input)?;
    let (input, name) = identifier(input)?;
    let (input, type_name) = opt(type_annotation)(input)?;
    let (input, initial_value) = opt(initial_value)(input)?;

    Ok((
        input,
        DeclarationParts {
            is_private: private.is_some(),
            name,
            type_name,
            initial_value,
        },
    ))
}
