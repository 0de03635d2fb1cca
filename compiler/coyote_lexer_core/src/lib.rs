//! Low-level scanning primitives for the Coyote lexer.
//!
//! - [`Reader`]: a bounded cursor over normalized source text with peek,
//!   rewind and predicate-driven consumption. It knows nothing about tokens.
//! - [`chars`]: the character classes the tokenizer dispatches on.
//!
//! # Input Contract
//!
//! Line endings must already be normalized to `\n`. The reader treats `\r`
//! as an ordinary character.

pub mod chars;
mod reader;

pub use reader::Reader;
