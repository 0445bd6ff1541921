//! ES module import lines.

use mstgen_codegen::builder::{CodeFragment, Renderable};

/// `import { ... } from "module";`, optionally `import type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    module: String,
    bindings: Vec<String>,
    type_only: bool,
}

impl Import {
    /// A value import from `module`.
    pub fn values(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            bindings: Vec::new(),
            type_only: false,
        }
    }

    /// An `import type` from `module`, erased when compiled.
    pub fn types(module: impl Into<String>) -> Self {
        Self {
            type_only: true,
            ..Self::values(module)
        }
    }

    pub fn binding(mut self, name: impl Into<String>) -> Self {
        self.bindings.push(name.into());
        self
    }

    pub fn bindings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bindings.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn statement(&self) -> String {
        if self.bindings.is_empty() {
            return format!("import \"{}\";", self.module);
        }
        format!(
            "import {}{{ {} }} from \"{}\";",
            if self.type_only { "type " } else { "" },
            self.bindings.join(", "),
            self.module
        )
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
