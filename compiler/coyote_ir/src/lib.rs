//! Coyote IR - token model for the GML-family lexer.
//!
//! This crate contains the data produced by a scanning pass:
//! - [`Position`] and [`Span`] for source locations
//! - [`Token`], [`TokenKind`] and the payload-free [`TokenTag`]
//! - Literal payloads ([`Literal`], [`NumberLiteral`])
//! - Nested records for macros ([`MacroRecord`]) and template strings
//!   ([`TemplateRecord`])
//!
//! Every value is created during a single scan and is immutable afterwards.
//! Nested token lists are owned by the token that carries them.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod token;

pub use position::{Position, Span};
pub use token::{
    AccessorKind, Comment, CommentKind, InPlaceOp, Keyword, Literal, MacroRecord, NumberLiteral,
    NumberRadix, NumberValue, SectionSpan, Spelling, TemplateRecord, Token, TokenKind, TokenTag,
};
