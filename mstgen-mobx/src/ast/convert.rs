//! The `Convert` class holding JSON marshal helpers.

use mstgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `public static` method with a single parameter.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    param: String,
    param_ty: String,
    returns: String,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: String::new(),
            param_ty: String::new(),
            returns: String::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.param = name.into();
        self.param_ty = ty.into();
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = ty.into();
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn to_fragment(&self) -> CodeFragment {
        CodeFragment::block(
            format!(
                "public static {}({}: {}): {} {{",
                self.name, self.param, self.param_ty, self.returns
            ),
            self.body.iter().cloned().map(CodeFragment::Line).collect(),
            Some("}".to_string()),
        )
    }
}

/// Builder for `export class Convert { ... }`.
#[derive(Debug, Clone, Default)]
pub struct ConvertClass {
    methods: Vec<Method>,
}

impl ConvertClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ConvertClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.push(method.to_fragment());
        }
        vec![CodeFragment::block(
            "export class Convert {",
            body,
            Some("}".to_string()),
        )]
    }
}
