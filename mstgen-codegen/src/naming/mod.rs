//! Collision-free identifier assignment.
//!
//! Names are requested with [`Namer::intern`] while the generator walks its
//! input, then resolved all at once with [`Namer::assign`], so that priority
//! rather than discovery order decides who gets the short names.

mod convention;
mod registry;

pub use convention::{
    NamingConvention, TS_ENUM_CASE_NAMING, TS_PROPERTY_NAMING, TS_RESERVED, TS_TYPE_NAMING,
};
pub use registry::{NameId, Namer, Names};
