//! `types.model` declaration builder.

use mstgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// One property of a model: an already-quoted key and its type expression.
#[derive(Debug, Clone)]
pub struct ModelProperty {
    pub key: String,
    pub value: String,
    pub doc: Option<String>,
}

impl ModelProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }
}

/// Builder for `export const Name = types.model("Name", { ... });`.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    factory: String,
    doc: Option<String>,
    properties: Vec<ModelProperty>,
}

impl Model {
    /// `factory` is the model constructor expression, usually `types.model`.
    pub fn new(name: impl Into<String>, factory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factory: factory.into(),
            doc: None,
            properties: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn property(mut self, property: ModelProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for property in &self.properties {
            if let Some(doc) = &property.doc {
                fragments.push(CodeFragment::doc(doc));
            }
            fragments.push(CodeFragment::Line(format!(
                "{}: {},",
                property.key, property.value
            )));
        }
        fragments
    }
}

impl Renderable for Model {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }

        let head = format!(
            "export const {} = {}(\"{}\", {{",
            self.name, self.factory, self.name
        );
        if self.properties.is_empty() {
            fragments.push(CodeFragment::Line(format!("{}}});", head)));
        } else {
            fragments.push(CodeFragment::block(
                head,
                self.properties_to_fragments(),
                Some("});".to_string()),
            ));
        }
        fragments
    }
}
