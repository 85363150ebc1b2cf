//! Line scanner for the schema block structure.
//!
//! Grammar handled here:
//!
//! ```text
//! schema := (block | comment | blank)*
//! block  := keyword Name '{' body-line* '}'
//! ```
//!
//! Brace matching is single-level: the first `}` after a header closes the
//! block. Braces inside string literals or after a `//` comment marker are
//! not closing braces.

use super::Diagnostic;

/// A body line with its 1-based source line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    /// Line text, trimmed.
    pub text: String,
}

/// One top-level block (`model`, `enum`, `datasource`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Header keyword, e.g. `model`.
    pub keyword: String,

    /// Block name, e.g. `Product`.
    pub name: String,

    /// Line of the header.
    pub line: usize,

    /// Non-blank body lines in order.
    pub body: Vec<SourceLine>,
}

impl Block {
    /// Whether this is a `model` block.
    pub fn is_model(&self) -> bool {
        self.keyword == "model"
    }
}

/// Result of scanning a schema source.
#[derive(Debug, Default)]
pub struct ScanOutput {
    /// Closed blocks in source order.
    pub blocks: Vec<Block>,

    /// Structural problems found while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

/// Split a schema source into top-level blocks.
pub fn scan(source: &str) -> ScanOutput {
    let mut output = ScanOutput::default();
    let mut open: Option<Block> = None;

    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        match open.take() {
            Some(mut block) => {
                if feed_body(&mut block, line, number) {
                    output.blocks.push(block);
                } else {
                    open = Some(block);
                }
            }
            None => {
                if line.is_empty() || is_comment(line) {
                    continue;
                }

                match parse_header(line) {
                    Some((keyword, name, rest)) => {
                        let mut block = Block {
                            keyword: keyword.to_string(),
                            name: name.to_string(),
                            line: number,
                            body: Vec::new(),
                        };
                        if feed_body(&mut block, rest.trim(), number) {
                            output.blocks.push(block);
                        } else {
                            open = Some(block);
                        }
                    }
                    None => output.diagnostics.push(Diagnostic::new(
                        number,
                        "unexpected line outside of a block",
                        line,
                    )),
                }
            }
        }
    }

    if let Some(block) = open {
        output.diagnostics.push(Diagnostic::new(
            block.line,
            format!("{} `{}` is never closed", block.keyword, block.name),
            format!("{} {} {{", block.keyword, block.name),
        ));
    }

    output
}

/// Append body content to `block`. Returns `true` when the block closes.
fn feed_body(block: &mut Block, text: &str, number: usize) -> bool {
    if text.is_empty() {
        return false;
    }

    if is_comment(text) {
        block.body.push(SourceLine {
            number,
            text: text.to_string(),
        });
        return false;
    }

    match closing_brace(text) {
        Some(pos) => {
            let before = text[..pos].trim();
            if !before.is_empty() {
                block.body.push(SourceLine {
                    number,
                    text: before.to_string(),
                });
            }
            true
        }
        None => {
            block.body.push(SourceLine {
                number,
                text: text.to_string(),
            });
            false
        }
    }
}

/// Byte offset of the first `}` outside string literals and trailing comments.
fn closing_brace(text: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '}' => return Some(pos),
            '/' if matches!(chars.peek(), Some((_, '/'))) => return None,
            _ => {}
        }
    }

    None
}

/// Parse `keyword Name {rest`.
fn parse_header(line: &str) -> Option<(&str, &str, &str)> {
    let (head, rest) = line.split_once('{')?;
    let mut tokens = head.split_whitespace();
    let keyword = tokens.next()?;
    let name = tokens.next()?;

    if tokens.next().is_some() || !is_identifier(keyword) || !is_identifier(name) {
        return None;
    }

    Some((keyword, name, rest))
}

pub(crate) fn is_comment(line: &str) -> bool {
    line.starts_with("//")
}

pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_multiple_blocks() {
        let source = r#"
datasource db {
  provider = "postgresql"
}

model User {
  id   Int    @id
  name String
}

enum Role {
  ADMIN
  USER
}
"#;
        let output = scan(source);
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.blocks.len(), 3);
        assert_eq!(output.blocks[0].keyword, "datasource");
        assert_eq!(output.blocks[1].name, "User");
        assert!(output.blocks[1].is_model());
        assert_eq!(output.blocks[1].body.len(), 2);
        assert_eq!(output.blocks[1].body[0].text, "id   Int    @id");
        assert_eq!(output.blocks[1].body[0].number, 7);
        assert_eq!(output.blocks[2].keyword, "enum");
    }

    #[test]
    fn test_scan_one_line_block() {
        let output = scan("model Tag { id Int @id }");
        assert_eq!(output.blocks.len(), 1);
        assert_eq!(output.blocks[0].body.len(), 1);
        assert_eq!(output.blocks[0].body[0].text, "id Int @id");
    }

    #[test]
    fn test_scan_header_without_space_before_brace() {
        let output = scan("model Tag{\n  id Int @id\n}");
        assert_eq!(output.blocks.len(), 1);
        assert_eq!(output.blocks[0].name, "Tag");
    }

    #[test]
    fn test_brace_in_comment_does_not_close() {
        let output = scan("model Tag {\n  // see {docs}\n  id Int @id\n}");
        assert_eq!(output.blocks.len(), 1);
        assert_eq!(output.blocks[0].body.len(), 2);
    }

    #[test]
    fn test_unclosed_block_is_reported() {
        let output = scan("model Broken {\n  id Int @id\n");
        assert!(output.blocks.is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].line, 1);
        assert!(output.diagnostics[0].message.contains("never closed"));
    }

    #[test]
    fn test_stray_top_level_line_is_reported() {
        let output = scan("model\n// comment\n");
        assert!(output.blocks.is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].line, 1);
    }

    #[test]
    fn test_brace_in_string_literal_does_not_close() {
        let output = scan(
            "model Template {\n  id Int @id\n  tpl String @default(\"}\")\n  esc String @default(\"\\\"}\")\n  name String\n}",
        );
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
        assert_eq!(output.blocks.len(), 1);
        let texts: Vec<_> = output.blocks[0].body.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "id Int @id",
                "tpl String @default(\"}\")",
                "esc String @default(\"\\\"}\")",
                "name String"
            ]
        );
    }

    #[test]
    fn test_brace_in_trailing_comment_does_not_close() {
        let output = scan("model Tag {\n  id Int @id // {}\n  name String\n}");
        assert_eq!(output.blocks.len(), 1);
        assert_eq!(output.blocks[0].body.len(), 2);
        assert_eq!(output.blocks[0].body[0].text, "id Int @id // {}");
    }

    #[test]
    fn test_closing_brace_after_string() {
        assert_eq!(closing_brace("a \"}\" }"), Some(6));
        assert_eq!(closing_brace("\"}\""), None);
        assert_eq!(closing_brace("}"), Some(0));
    }
}
