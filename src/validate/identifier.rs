//! String predicates used by the validation rules.

/// Returns true if `s` is usable as a package or module name.
///
/// The first character must be a letter or `_`; the rest may be letters,
/// digits or `_`. Letters and digits include non-ASCII alphabetic and
/// numeric characters. The empty string is not an identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Returns true if lowercasing `s` leaves it unchanged.
///
/// Strings without cased characters (digits, punctuation, the empty string)
/// are lowercase.
pub fn is_lowercase(s: &str) -> bool {
    s == s.to_lowercase()
}
