//! mobx-state-tree model generation for mstgen.
//!
//! Lowers a [`mstgen_graph::TypeGraph`] to a TypeScript file of
//! `types.model` declarations, string enums and optional JSON `Convert`
//! helpers. Rendering is pure: [`Generator::generate`] returns the file
//! text and performs no I/O.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
pub mod code_file;
mod emitter;
mod error;
pub mod naming;
mod options;
pub mod plan;
mod quote;
pub mod runtime;
mod source;
pub mod translator;
mod vocabulary;

pub use emitter::Generator;
pub use error::{Error, Result};
pub use options::{
    ConverterScope, DEFAULT_MODULE, MstOptions, OPTION_NAMES, PropertyNaming, RendererConfig,
    TypeScriptOptions,
};
pub use quote::{KeyConvention, quote_property_name};
pub use runtime::{DateError, DateSnapshot, runtime_module_source};
pub use source::{Part, Word, paren_if_needed};
pub use vocabulary::{Scalar, Vocabulary};
