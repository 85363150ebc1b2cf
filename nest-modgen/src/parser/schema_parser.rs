//! Schema parser: blocks to models.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{SchemaError, SchemaResult};
use crate::ir::Model;

use super::field_parser::FieldParser;
use super::scanner::{self, is_comment, Block};
use super::{Diagnostic, ParsedSchema};

/// Prefix of block-level annotations (`@@id`, `@@unique`, `@@map`, ...).
const BLOCK_ANNOTATION: &str = "@@";

/// Composite identity annotation.
const COMPOSITE_ID_ANNOTATION: &str = "@@id";

/// Parser for schema sources.
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a schema file.
    ///
    /// A read failure is fatal; nothing is parsed.
    pub fn parse_file(&self, path: &Path) -> SchemaResult<ParsedSchema> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SchemaError::read(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read schema");
        Ok(self.parse(&content))
    }

    /// Parse schema text into models in source order.
    pub fn parse(&self, source: &str) -> ParsedSchema {
        let scanned = scanner::scan(source);
        let mut diagnostics = scanned.diagnostics;
        let mut models = Vec::new();

        for block in scanned.blocks.iter().filter(|b| b.is_model()) {
            let model = parse_model(block, &mut diagnostics);
            debug!(
                model = model.name(),
                fields = model.fields().len(),
                capability = model.capability().as_str(),
                "parsed model"
            );
            models.push(model);
        }

        for diagnostic in &diagnostics {
            warn!(line = diagnostic.line, "{}", diagnostic);
        }

        ParsedSchema {
            models,
            diagnostics,
        }
    }
}

fn parse_model(block: &Block, diagnostics: &mut Vec<Diagnostic>) -> Model {
    let mut fields = Vec::new();
    let mut composite_id: Option<Vec<String>> = None;
    let mut composite_key: Option<String> = None;

    for line in &block.body {
        let text = line.text.as_str();

        if is_comment(text) {
            continue;
        }

        if text.starts_with(BLOCK_ANNOTATION) {
            if let Some(args) = annotation_args(text, COMPOSITE_ID_ANNOTATION) {
                if composite_id.is_some() {
                    diagnostics.push(Diagnostic::new(
                        line.number,
                        format!("duplicate @@id in model `{}` ignored", block.name),
                        text,
                    ));
                    continue;
                }
                match parse_field_list(args) {
                    Some(ids) if !ids.is_empty() => {
                        composite_id = Some(ids);
                        composite_key = parse_key_name(args);
                    }
                    _ => diagnostics.push(Diagnostic::new(
                        line.number,
                        "@@id without a field list",
                        text,
                    )),
                }
            }
            continue;
        }

        match FieldParser::parse_line(text, line.number) {
            Some(field) => fields.push(field),
            None => diagnostics.push(Diagnostic::new(
                line.number,
                format!("unrecognized declaration in model `{}`", block.name),
                text,
            )),
        }
    }

    Model::new(block.name.clone(), fields, composite_id).with_composite_key(composite_key)
}

/// Arguments of `@@name(...)` when `text` is exactly that annotation.
fn annotation_args<'a>(text: &'a str, annotation: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(annotation)?;
    rest.trim_start().strip_prefix('(')
}

/// Extract `[a, b]` from `([a, b])` or `(fields: [a, b], name: "x")`.
fn parse_field_list(args: &str) -> Option<Vec<String>> {
    let start = args.find('[')?;
    let end = start + args[start..].find(']')?;

    Some(
        args[start + 1..end]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Value of the `name: "..."` argument that follows the field list.
fn parse_key_name(args: &str) -> Option<String> {
    let after_list = &args[args.find(']')? + 1..];

    after_list.split(',').find_map(|arg| {
        let value = arg.trim().strip_prefix("name")?.trim_start().strip_prefix(':')?;
        let quoted = value.trim_start().strip_prefix('"')?;
        let (name, _) = quoted.split_once('"')?;
        (!name.is_empty()).then(|| name.to_string())
    })
}
