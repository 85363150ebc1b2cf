//! Parser module for extracting models from schema text.
//!
//! This module contains:
//! - The block scanner (header, body lines, closing brace)
//! - The field declaration parser and classifier
//! - The schema parser tying both into [`Model`]s

pub mod field_parser;
pub mod scanner;
pub mod schema_parser;

use std::fmt;

use crate::ir::Model;

pub use field_parser::{FieldDecl, FieldParser};
pub use schema_parser::SchemaParser;

/// A non-fatal problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: usize,

    /// What went wrong.
    pub message: String,

    /// The offending source text, trimmed.
    pub text: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: `{}`", self.line, self.message, self.text)
    }
}

/// Models extracted from one schema source.
#[derive(Debug, Clone, Default)]
pub struct ParsedSchema {
    /// Models in source order.
    pub models: Vec<Model>,

    /// Lines that were skipped, with the reason.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedSchema {
    /// Find a model by name, ignoring ASCII case.
    pub fn find_model(&self, name: &str) -> Option<&Model> {
        self.models
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Names of all parsed models.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_model_is_case_insensitive() {
        let schema = SchemaParser::new().parse("model DomCategory {\n  id Int @id\n}");
        assert!(schema.find_model("domcategory").is_some());
        assert!(schema.find_model("DOMCATEGORY").is_some());
        assert!(schema.find_model("Dom").is_none());
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::new(3, "unrecognized declaration", "oops");
        assert_eq!(d.to_string(), "line 3: unrecognized declaration: `oops`");
    }
}
