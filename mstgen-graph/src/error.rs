use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::TypeId;

/// Result type for type graph operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A structural problem with a type graph.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GraphError {
    #[error("type {from} references {to}, which does not exist")]
    #[diagnostic(code(mstgen::dangling_reference))]
    DanglingReference { from: TypeId, to: TypeId },

    #[error("top-level '{name}' references {to}, which does not exist")]
    #[diagnostic(code(mstgen::dangling_reference))]
    DanglingTopLevel { name: String, to: TypeId },

    #[error("union {0} has no members")]
    #[diagnostic(code(mstgen::empty_union))]
    EmptyUnion(TypeId),

    #[error("enum {0} has no cases")]
    #[diagnostic(code(mstgen::empty_enum))]
    EmptyEnum(TypeId),

    #[error("enum {ty} lists case '{case}' more than once")]
    #[diagnostic(code(mstgen::duplicate_case))]
    DuplicateCase { ty: TypeId, case: String },

    #[error("top-level '{0}' is defined more than once")]
    #[diagnostic(
        code(mstgen::duplicate_top_level),
        help("every top-level needs a distinct name")
    )]
    DuplicateTopLevel(String),

    #[error("type {0} is part of a reference cycle that does not pass through a class")]
    #[diagnostic(
        code(mstgen::unmediated_cycle),
        help("recursive types must recurse through an object type")
    )]
    UnmediatedCycle(TypeId),

    #[error("{kind} type {ty} is missing required field '{field}'")]
    #[diagnostic(code(mstgen::missing_field))]
    MissingField {
        ty: TypeId,
        kind: &'static str,
        field: &'static str,
    },

    #[error("type {0} is not a class")]
    #[diagnostic(code(mstgen::not_a_class))]
    NotAClass(TypeId),
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse type graph")]
    #[diagnostic(code(mstgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{reason}")]
    #[diagnostic(code(mstgen::invalid_graph))]
    Invalid {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        reason: GraphError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = line_col_offset(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn invalid(
        reason: GraphError,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Invalid {
            src: NamedSource::new(filename, src.to_string()),
            span,
            reason,
        })
    }

    /// The structural problem behind this error, if any.
    pub fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Error::Invalid { reason, .. } => Some(reason),
            Error::Graph(e) => Some(e),
            _ => None,
        }
    }
}

/// Convert a 1-based line and column (as reported by serde_json) to a byte offset.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start = if line == 1 {
        0
    } else {
        src.match_indices('\n').nth(line - 2).map(|(i, _)| i + 1)?
    };
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}

/// Find the span of a JSON string literal `"needle"` in the source.
pub(crate) fn find_string_span(src: &str, needle: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", needle);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos, quoted.len())))
}
