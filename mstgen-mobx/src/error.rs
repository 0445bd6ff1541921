use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use mstgen_codegen::naming::NameId;
use mstgen_graph::TypeId;
use thiserror::Error;

/// Result type for generator operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("name {0:?} was referenced but never resolved")]
    #[diagnostic(code(mstgen::unresolved_name))]
    UnresolvedName(NameId),

    #[error("{kind} type {ty} has no name")]
    #[diagnostic(
        code(mstgen::unnamed_type),
        help("give the type a name in the graph or make it a top-level")
    )]
    UnnamedType { ty: TypeId, kind: &'static str },

    #[error("unknown renderer option '{key}'")]
    #[diagnostic(code(mstgen::unknown_option), help("valid options are: {valid}"))]
    UnknownOption { key: String, valid: String },

    #[error("invalid value '{value}' for renderer option '{key}'")]
    #[diagnostic(code(mstgen::invalid_option), help("{reason}"))]
    InvalidOption {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse renderer configuration")]
    #[diagnostic(code(mstgen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a configuration parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.message().to_string(),
            source,
        })
    }

    pub fn invalid_option(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidOption {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
