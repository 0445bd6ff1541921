//! The custom `Date` scalar used by generated models.
//!
//! [`date`] implements the scalar's snapshot contract; [`module`] renders the
//! TypeScript module that installs it into the `types` namespace.

pub mod date;
pub mod module;

pub use date::{
    DateError, DateSnapshot, from_snapshot, normalize_timestamp_ms, to_snapshot,
    validation_message,
};
pub use module::runtime_module_source;

/// Tail of the message for a snapshot that is not a timestamp.
pub const INVALID_TIMESTAMP: &str = "doesn't look like a valid literal timestamp or unix timestamp";
