//! Layout of a generated models file.

use mstgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// The generated file: import lines, a `//` header and declarations.
///
/// Non-empty sections are separated by one blank line and so are
/// consecutive declarations.
///
/// ```
/// use mstgen_mobx::code_file::CodeFile;
/// use mstgen_mobx::ast::{Import, Model};
///
/// let file = CodeFile::new()
///     .import(Import::values("mobx-state-tree").binding("types"))
///     .add(Model::new("Empty", "types.model"))
///     .render();
/// assert_eq!(
///     file,
///     "import { types } from \"mobx-state-tree\";\n\nexport const Empty = types.model(\"Empty\", {});\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    header: Vec<String>,
    declarations: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports without bindings are skipped.
    pub fn import(mut self, import: Import) -> Self {
        if !import.is_empty() {
            self.imports.push(import);
        }
        self
    }

    /// Append header comment lines; an empty line renders as `//`.
    pub fn comment_lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.header.extend(lines);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, declaration: impl Renderable) -> Self {
        self.declarations.push(declaration.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(self, declarations: impl IntoIterator<Item = R>) -> Self {
        declarations.into_iter().fold(self, Self::add)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.header.is_empty() && self.declarations.is_empty()
    }

    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        if !self.imports.is_empty() {
            sections.push(self.imports.iter().flat_map(Import::to_fragments).collect());
        }
        if !self.header.is_empty() {
            sections.push(self.header.iter().cloned().map(CodeFragment::Comment).collect());
        }
        sections.extend(self.declarations.iter().cloned());

        let mut builder = CodeBuilder::new(indent);
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}
