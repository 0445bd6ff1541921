//! Model property keys.

use mstgen_core::{is_identifier_start, legalize_name, string_escape};

/// The identifier rules a bare property key must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct KeyConvention {
    pub legalize: fn(&str) -> String,
    pub is_identifier_start: fn(char) -> bool,
}

impl Default for KeyConvention {
    fn default() -> Self {
        Self {
            legalize: legalize_name,
            is_identifier_start,
        }
    }
}

/// Render a property key, quoting it unless it is a plain identifier.
///
/// The key is quoted when it is empty, when it does not start with an
/// identifier character, when escaping would change it, or when the
/// legalizer would change it.
pub fn quote_property_name(original: &str, convention: &KeyConvention) -> String {
    let escaped = string_escape(original);
    let bare = match original.chars().next() {
        None => false,
        Some(first) => {
            (convention.is_identifier_start)(first)
                && escaped == original
                && (convention.legalize)(original) == original
        }
    };

    if bare {
        original.to_string()
    } else {
        format!("\"{}\"", escaped)
    }
}
