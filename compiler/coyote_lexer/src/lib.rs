//! Coyote lexer.
//!
//! Converts normalized GML-family source text into [`Token`]s. The public
//! surface is small:
//!
//! - [`scan`] / [`scan_to_end`] for whole sources
//! - [`Tokenizer`] for a non-default starting [`Mode`]
//! - [`decode_escapes`] for string bodies produced elsewhere
//!
//! # Errors
//!
//! The first lexical error aborts the scan. [`LexError`] carries the
//! position, what went wrong, what was being scanned and how to fix it.
//!
//! # Input
//!
//! Line endings must be normalized to `\n` by the caller.

mod escape;
mod keywords;
mod lex_error;
mod numeric;
mod tokenizer;

pub use coyote_ir::Token;
pub use escape::{decode_escapes, EscapeError, EscapeErrorKind};
pub use keywords::keyword_table;
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
pub use tokenizer::{Mode, Tokenizer};

/// Tokenize a whole source file.
///
/// Returns tokens in source order, without a trailing end-of-input token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).scan()
}

/// [`scan`], then append a synthetic `Eof` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_to_end(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).scan_to_end()
}
