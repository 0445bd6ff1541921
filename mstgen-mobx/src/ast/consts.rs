//! TypeScript const declaration builder.

use mstgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `export const Name = value;`.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    doc: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::Line(format!(
            "export const {} = {};",
            self.name, self.value
        )));
        fragments
    }
}
