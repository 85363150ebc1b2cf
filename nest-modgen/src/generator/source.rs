//! Small line-oriented source builder shared by the emitters.

use super::traits::IndentStyle;

/// Accumulates generated source one line at a time.
#[derive(Debug)]
pub struct SourceBuilder {
    buf: String,
    indent: IndentStyle,
}

impl SourceBuilder {
    pub fn new(indent: IndentStyle) -> Self {
        Self {
            buf: String::new(),
            indent,
        }
    }

    /// Append `text` at indentation `depth`, followed by a newline.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            self.buf.push_str(&self.indent.indent(depth));
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
