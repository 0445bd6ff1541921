//! JavaScript identifier rules.

use unicode_ident::{is_xid_continue, is_xid_start};

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

/// Whether `c` may start a JavaScript identifier: a Unicode letter or
/// letter number, `$` or `_`.
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || is_xid_start(c)
}

/// Whether `c` may appear after the first character of an identifier.
///
/// Adds combining marks, decimal digits and connector punctuation to the
/// start set, plus the two zero-width joiners.
pub fn is_identifier_part(c: char) -> bool {
    c == '$' || c == ZWNJ || c == ZWJ || is_xid_continue(c)
}

/// Replace every character that cannot appear in an identifier with `_`.
///
/// The first character is not checked against [`is_identifier_start`];
/// callers that need a valid start handle that themselves.
pub fn legalize_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_start() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(is_identifier_start('$'));
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('é'));
        assert!(!is_identifier_start('1'));
        assert!(!is_identifier_start('-'));
        assert!(!is_identifier_start(' '));
        // Combining marks continue an identifier but cannot start one
        assert!(!is_identifier_start('\u{345}'));
        assert!(is_identifier_part('\u{345}'));
    }

    #[test]
    fn test_identifier_part() {
        assert!(is_identifier_part('7'));
        assert!(is_identifier_part('_'));
        assert!(is_identifier_part('$'));
        assert!(is_identifier_part('\u{200D}'));
        assert!(!is_identifier_part('²'));
        assert!(!is_identifier_part('-'));
    }

    #[test]
    fn test_legalize_name() {
        assert_eq!(legalize_name("valid_name"), "valid_name");
        assert_eq!(legalize_name("name with space"), "name_with_space");
        assert_eq!(legalize_name("wc-on-hold"), "wc_on_hold");
        assert_eq!(legalize_name("123abc"), "123abc");
        assert_eq!(legalize_name("x²"), "x_");
        assert_eq!(legalize_name(""), "");
    }
}
