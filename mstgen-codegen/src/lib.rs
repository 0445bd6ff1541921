//! Language-neutral pieces of the mstgen code generator.
//!
//! [`builder`] lays out indented source text and [`naming`] hands out
//! collision-free identifiers.

pub mod builder;
pub mod naming;
