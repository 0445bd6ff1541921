//! String literal escaping for JavaScript-family targets.

use std::fmt::Write;

/// Escape a string for use inside a double-quoted JavaScript string literal.
///
/// Backslashes and double quotes are escaped, control characters use their
/// short escapes (`\n`, `\t`, ...) or `\uXXXX`, and characters outside the
/// Basic Multilingual Plane are written as UTF-16 surrogate pair escapes.
/// Every other printable character is kept as-is.
pub fn string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() || is_separator(c) => push_unit_escapes(&mut out, c),
            c if (c as u32) > 0xFFFF => push_unit_escapes(&mut out, c),
            c => out.push(c),
        }
    }
    out
}

// U+2028 and U+2029 terminate lines in older JavaScript engines.
fn is_separator(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}')
}

fn push_unit_escapes(out: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        let _ = write!(out, "\\u{:04x}", unit);
    }
}
