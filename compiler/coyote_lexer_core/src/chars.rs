//! Character classes used by the tokenizer.
//!
//! Identifiers are ASCII-only. Anything outside these classes falls through
//! the tokenizer's dispatch and is skipped.

/// Horizontal whitespace skipped between tokens. Newlines are significant.
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}')
}

#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Decimal digit or `_` separator.
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

/// Hexadecimal digit or `_` separator.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}

/// Binary digit or `_` separator.
#[inline]
pub fn is_bin_digit(c: char) -> bool {
    matches!(c, '0' | '1' | '_')
}
