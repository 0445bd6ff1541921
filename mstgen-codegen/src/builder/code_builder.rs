//! Indentation-aware text buffer for generated source.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines at a current indentation level.
///
/// `push_*` methods borrow the builder and suit incremental emission from
/// loops; the plain methods consume and return it so short templates read
/// top to bottom:
///
/// ```
/// use mstgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export enum Status {")
///     .indent()
///     .line("Draft = \"draft\",")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export enum Status {\n  Draft = \"draft\",\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.indent.write_to(&mut self.buffer);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// An empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Dedenting at level zero is a no-op.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// A `/** ... */` block with one ` * ` line per entry.
    ///
    /// A `*/` inside the text is broken up so it cannot end the comment early.
    pub fn push_doc_block<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            let line = line.as_ref().replace("*/", "*\\/");
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// A `//` line; empty text gives a bare `//`.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("//")
        } else {
            self.push_line(&format!("// {}", text))
        }
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.apply_indented(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(body) => self.apply_indented(body),
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    fn apply_indented(&mut self, fragments: Vec<CodeFragment>) {
        self.push_indent();
        for f in fragments {
            self.apply_fragment(f);
        }
        self.push_dedent();
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// `header`, the body written by `f` one level deeper, then `close`.
    ///
    /// ```
    /// use mstgen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block_with_close("export const types = {", "};", |b| b.line("...baseTypes,"))
    ///     .build();
    /// assert_eq!(code, "export const types = {\n  ...baseTypes,\n};\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.line(header).indent()).dedent().line(close)
    }

    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
