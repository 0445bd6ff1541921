//! The runtime vocabulary generated models are written in.

use std::collections::HashMap;

use crate::{options::DEFAULT_MODULE, source::Word};

/// Leaf types with a fixed runtime expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Any,
    Null,
    Boolean,
    Number,
    String,
    Date,
}

impl Scalar {
    const ALL: [Scalar; 6] = [
        Scalar::Any,
        Scalar::Null,
        Scalar::Boolean,
        Scalar::Number,
        Scalar::String,
        Scalar::Date,
    ];

    /// The member of the `types` namespace used by stock mobx-state-tree.
    fn standard_member(self) -> &'static str {
        match self {
            Scalar::Any => "frozen()",
            Scalar::Null => "null",
            Scalar::Boolean => "boolean",
            Scalar::Number => "number",
            Scalar::String => "string",
            Scalar::Date => "Date",
        }
    }
}

/// The namespace, import module and scalar expressions used by the emitter.
///
/// Composed once by the caller and passed to the generator:
///
/// ```
/// use mstgen_mobx::{Scalar, Vocabulary};
///
/// let vocabulary = Vocabulary::standard()
///     .with_module("./types")
///     .with_scalar(Scalar::Any, "types.frozen<unknown>()");
/// assert_eq!(vocabulary.module(), "./types");
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    namespace: String,
    module: String,
    scalars: HashMap<Scalar, String>,
}

impl Vocabulary {
    /// Stock mobx-state-tree: `types.*` imported from `mobx-state-tree`.
    pub fn standard() -> Self {
        let namespace = "types".to_string();
        let scalars = Scalar::ALL
            .into_iter()
            .map(|s| (s, format!("{}.{}", namespace, s.standard_member())))
            .collect();
        Self {
            namespace,
            module: DEFAULT_MODULE.to_string(),
            scalars,
        }
    }

    /// Import the `types` namespace from another module, such as a local
    /// runtime module that overrides some scalars.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Replace the expression used for a scalar.
    pub fn with_scalar(mut self, scalar: Scalar, expr: impl Into<String>) -> Self {
        self.scalars.insert(scalar, expr.into());
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// `types.<member>` for a member of the namespace.
    pub fn member(&self, member: &str) -> String {
        format!("{}.{}", self.namespace, member)
    }

    pub fn scalar(&self, scalar: Scalar) -> Word {
        let expr = self
            .scalars
            .get(&scalar)
            .cloned()
            .unwrap_or_else(|| self.member(scalar.standard_member()));
        Word::text(expr)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
