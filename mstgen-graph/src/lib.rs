// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The type graph consumed by the mstgen code generator.
//!
//! A [`TypeGraph`] is an arena of [`TypeNode`]s addressed by [`TypeId`],
//! plus an ordered list of [`TopLevel`] entry points. Graphs are built with
//! [`GraphBuilder`] or loaded from JSON with [`TypeGraph::from_json_str`] /
//! [`TypeGraph::open`], and are validated either way.

mod builder;
mod error;
mod graph;
mod parse;
mod validate;

pub use builder::GraphBuilder;
pub use error::{Error, GraphError, Result};
pub use graph::*;
