//! TypeScript string enum builder.

use mstgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `export enum Name { Case = "value", ... }`.
///
/// Case values are written as given; callers escape them.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    name: String,
    doc: Option<String>,
    cases: Vec<(String, String)>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            cases: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn case(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cases.push((name.into(), value.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        let body = self
            .cases
            .iter()
            .map(|(name, value)| CodeFragment::Line(format!("{} = \"{}\",", name, value)))
            .collect();
        fragments.push(CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
