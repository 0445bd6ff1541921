//! Core utilities for the mstgen code generator.
//!
//! Pure functions shared by the naming registry and the emitters: word
//! splitting and case conversion, identifier legalization and string
//! escaping for JavaScript-family targets.

mod case;
mod escape;
mod legalize;

// Case conversion
pub use case::{AcronymStyle, split_words, to_camel_case, to_pascal_case};
// String escaping
pub use escape::string_escape;
// Identifier rules
pub use legalize::{is_identifier_part, is_identifier_start, legalize_name};
