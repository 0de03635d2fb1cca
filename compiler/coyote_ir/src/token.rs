//! Token types produced by the Coyote lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the positions where it begins and
//! ends. Payloads live inside the `TokenKind` variants, so each kind carries
//! exactly the data it needs; [`TokenTag`] is the payload-free discriminant
//! used for cheap comparisons.

mod kind;
mod literal;
mod records;
mod tag;

pub use kind::{AccessorKind, Comment, CommentKind, InPlaceOp, Keyword, Spelling, TokenKind};
pub use literal::{Literal, NumberLiteral, NumberRadix, NumberValue};
pub use records::{MacroRecord, SectionSpan, TemplateRecord};
pub use tag::TokenTag;

use std::fmt;

use crate::{Position, Span};

/// A token with its source extent.
///
/// Invariant: `begin.offset <= end.offset`. For every token that is not
/// synthetic (only `Eof` is), `source[begin.offset..end.offset]` is the
/// token's lexeme.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub begin: Position,
    pub end: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, begin: Position, end: Position) -> Self {
        debug_assert!(begin.offset <= end.offset, "token ends before it begins");
        Token { kind, begin, end }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    /// Byte range covered by the token.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.begin.offset, self.end.offset)
    }

    /// The token's lexeme, sliced from the source it was scanned from.
    ///
    /// Returns `None` if `source` is not the text the token came from and
    /// the span falls outside it or off a char boundary.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.span().to_range())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
