//! Escape decoding for quoted string bodies.
//!
//! One forward pass copies literal runs verbatim and decodes each `\`
//! sequence into a fresh buffer. Recognized escapes:
//!
//! | Escape            | Result                         |
//! |-------------------|--------------------------------|
//! | `\\` `\"` `\'`    | the escaped character          |
//! | `\r \n \b \f \t \v \a` | the control character     |
//! | `\u` + 4 hex      | one code point                 |
//! | `\x` + 2 hex      | one code point                 |
//! | `\0` to `\7`      | code point 0 to 7              |

use std::borrow::Cow;

/// Why an escape sequence could not be decoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EscapeErrorKind {
    UnknownEscape { escape_char: char },
    /// A lone `\` ends the body.
    EmptyEscape,
    /// `\u` or `\x` followed by too few hex digits.
    NotEnoughDigits { escape: char, expected: u8, found: u8 },
    /// `\u` naming a surrogate.
    InvalidCodePoint { value: u32 },
}

/// A decoding failure and the byte offset of its `\` within the body.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EscapeError {
    pub kind: EscapeErrorKind,
    pub offset: usize,
}

/// Decode every escape sequence in `body`.
///
/// Borrows `body` unchanged when it contains no backslash.
pub fn decode_escapes(body: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !body.contains('\\') {
        return Ok(Cow::Borrowed(body));
    }

    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(slash) = rest.find('\\') {
        out.push_str(&rest[..slash]);
        let offset = body.len() - rest.len() + slash;
        let after = &rest[slash + 1..];
        let Some(esc) = after.chars().next() else {
            return Err(EscapeError {
                kind: EscapeErrorKind::EmptyEscape,
                offset,
            });
        };
        // Every recognized escape letter is ASCII, so `consumed` counts bytes.
        let consumed = match esc {
            '\\' | '"' | '\'' => {
                out.push(esc);
                1
            }
            'u' => 1 + push_hex(&mut out, &after[1..], 'u', 4, offset)?,
            'x' => 1 + push_hex(&mut out, &after[1..], 'x', 2, offset)?,
            '0'..='7' => {
                out.extend(char::from_u32(u32::from(esc) - u32::from('0')));
                1
            }
            _ => match simple_escape(esc) {
                Some(c) => {
                    out.push(c);
                    1
                }
                None => {
                    return Err(EscapeError {
                        kind: EscapeErrorKind::UnknownEscape { escape_char: esc },
                        offset,
                    })
                }
            },
        };
        rest = &after[consumed..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

#[inline]
fn simple_escape(c: char) -> Option<char> {
    match c {
        'r' => Some('\r'),
        'n' => Some('\n'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        'a' => Some('\u{07}'),
        _ => None,
    }
}

/// Decode exactly `count` hex digits from the start of `digits` and push the
/// resulting code point. Returns the number of bytes consumed.
fn push_hex(
    out: &mut String,
    digits: &str,
    escape: char,
    count: u8,
    offset: usize,
) -> Result<usize, EscapeError> {
    let found = digits
        .bytes()
        .take(usize::from(count))
        .take_while(u8::is_ascii_hexdigit)
        .count();
    if found < usize::from(count) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "found is bounded by count"
        )]
        let found = found as u8;
        return Err(EscapeError {
            kind: EscapeErrorKind::NotEnoughDigits {
                escape,
                expected: count,
                found,
            },
            offset,
        });
    }
    let value = digits[..found]
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc * 16 + d);
    let c = char::from_u32(value).ok_or(EscapeError {
        kind: EscapeErrorKind::InvalidCodePoint { value },
        offset,
    })?;
    out.push(c);
    Ok(found)
}
