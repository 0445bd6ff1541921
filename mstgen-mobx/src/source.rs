//! Rendered expressions: token sequences with deferred name resolution.

use std::borrow::Cow;

use mstgen_codegen::naming::{NameId, Names};

use crate::{Error, Result};

/// One token of a rendered expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(Cow<'static, str>),
    /// An identifier resolved once all names are assigned.
    Name(NameId),
}

impl Part {
    pub fn text(s: impl Into<Cow<'static, str>>) -> Self {
        Part::Text(s.into())
    }
}

impl From<&'static str> for Part {
    fn from(s: &'static str) -> Self {
        Part::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Part {
    fn from(s: String) -> Self {
        Part::Text(Cow::Owned(s))
    }
}

impl From<NameId> for Part {
    fn from(id: NameId) -> Self {
        Part::Name(id)
    }
}

/// A rendered expression.
///
/// `needs_parens` marks expressions built from operators, which must be
/// wrapped before being nested inside another expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    parts: Vec<Part>,
    needs_parens: bool,
}

impl Word {
    /// An expression that can be nested as-is (identifiers, calls, members).
    pub fn single(parts: impl IntoIterator<Item = Part>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
            needs_parens: false,
        }
    }

    /// An operator expression that needs parentheses when nested.
    pub fn composite(parts: impl IntoIterator<Item = Part>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
            needs_parens: true,
        }
    }

    pub fn text(s: impl Into<Cow<'static, str>>) -> Self {
        Self::single([Part::text(s)])
    }

    pub fn name(id: NameId) -> Self {
        Self::single([Part::Name(id)])
    }

    pub fn needs_parens(&self) -> bool {
        self.needs_parens
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Resolve every name and join the tokens.
    pub fn render(&self, names: &Names) -> Result<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(s) => out.push_str(s),
                Part::Name(id) => {
                    let name = names
                        .resolve(*id)
                        .ok_or_else(|| Box::new(Error::UnresolvedName(*id)))?;
                    out.push_str(name);
                }
            }
        }
        Ok(out)
    }
}

/// The tokens of `word`, wrapped in parentheses only if it needs them.
pub fn paren_if_needed(word: Word) -> Vec<Part> {
    if word.needs_parens {
        let mut parts = Vec::with_capacity(word.parts.len() + 2);
        parts.push(Part::from("("));
        parts.extend(word.parts);
        parts.push(Part::from(")"));
        parts
    } else {
        word.parts
    }
}
