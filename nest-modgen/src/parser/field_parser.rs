//! Field declaration parsing and classification.
//!
//! A field line has the shape `<name> <type>[[]][?] <attributes>`. The
//! lexical split is done by [`FieldDecl::split`]; [`FieldParser::classify`]
//! turns the captured pieces into a [`Field`].

use crate::ir::{Field, ScalarType};

use super::scanner::is_identifier;

/// Attribute token marking an identity field.
const ID_ATTR: &str = "@id";

/// Attribute token marking a unique field.
const UNIQUE_ATTR: &str = "@unique";

/// Attribute token introducing a default value.
const DEFAULT_ATTR: &str = "@default";

/// Raw pieces of one field declaration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl<'a> {
    /// Field name.
    pub name: &'a str,

    /// Type token as written, markers included (`Tag[]`, `String?`).
    pub type_token: &'a str,

    /// Everything after the type token.
    pub rest: &'a str,
}

impl<'a> FieldDecl<'a> {
    /// Split a trimmed body line into name, type token and remainder.
    ///
    /// Returns `None` when the line does not have the field shape.
    pub fn split(line: &'a str) -> Option<Self> {
        let name_end = line
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(line.len());
        let name = &line[..name_end];
        let after_name = &line[name_end..];

        if name.is_empty() || !after_name.starts_with(char::is_whitespace) {
            return None;
        }

        let after_name = after_name.trim_start();
        let type_end = after_name
            .find(|c: char| c.is_whitespace() || c == '@')
            .unwrap_or(after_name.len());
        let type_token = &after_name[..type_end];

        if !is_identifier(strip_markers(type_token).0) {
            return None;
        }

        Some(Self {
            name,
            type_token,
            rest: &after_name[type_end..],
        })
    }
}

/// Strip trailing `?` and `[]` markers: `(bare, is_optional, is_array)`.
pub fn strip_markers(type_token: &str) -> (&str, bool, bool) {
    let mut bare = type_token;
    let mut optional = false;
    let mut array = false;

    loop {
        if let Some(stripped) = bare.strip_suffix('?') {
            optional = true;
            bare = stripped;
        } else if let Some(stripped) = bare.strip_suffix("[]") {
            array = true;
            bare = stripped;
        } else {
            return (bare, optional, array);
        }
    }
}

/// Relation heuristic: capitalized and not a built-in scalar.
pub fn is_relation_type(bare_type: &str) -> bool {
    bare_type.starts_with(|c: char| c.is_uppercase()) && ScalarType::from_name(bare_type).is_none()
}

/// Builds [`Field`]s from declaration lines.
pub struct FieldParser;

impl FieldParser {
    /// Parse one trimmed body line. `None` if it is not a field declaration.
    pub fn parse_line(line: &str, number: usize) -> Option<Field> {
        FieldDecl::split(line).map(|decl| Self::classify(&decl, number))
    }

    /// Classify a split declaration.
    pub fn classify(decl: &FieldDecl<'_>, number: usize) -> Field {
        let (bare, is_optional, is_array) = strip_markers(decl.type_token);
        let relation = is_relation_type(bare).then(|| bare.to_string());

        Field {
            name: decl.name.to_string(),
            ty: bare.to_string(),
            is_optional,
            is_id: decl.rest.contains(ID_ATTR),
            is_unique: decl.rest.contains(UNIQUE_ATTR),
            has_default: decl.rest.contains(DEFAULT_ATTR),
            is_array,
            relation,
            line: number,
        }
    }
}
