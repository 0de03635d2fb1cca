//! The tokenizer state machine.
//!
//! One [`Reader`] is shared by the whole scan. Macro bodies and template
//! interpolation sections are scanned by re-entering [`Tokenizer::scan_body`]
//! with a different [`Mode`] and a fresh output buffer; the nested call
//! leaves the reader one past the construct it consumed, so the caller
//! resumes without resynchronizing.
//!
//! # Termination rules
//!
//! | Mode       | Ends at                                   |
//! |------------|-------------------------------------------|
//! | `None`     | end of input                              |
//! | `Macro`    | a bare newline, line comment or region     |
//! | `Template` | the `}` matching the section's `{`        |

mod directives;
mod literals;

use std::mem;

use coyote_ir::{
    AccessorKind, InPlaceOp, Literal, NumberLiteral, NumberRadix, Position, Spelling, Token,
    TokenKind,
};
use coyote_lexer_core::{chars, Reader};
use coyote_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{keywords, LexError, LexErrorContext};

/// Lexical mode of a scan.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Plain source.
    #[default]
    None,
    /// Body of a `#macro`.
    Macro,
    /// Interpolation section of a `$"..."` template.
    Template,
}

/// Why a call to `scan_body` returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Exit {
    EndOfInput,
    /// A macro body ended at a newline. The newline is consumed; line
    /// bookkeeping is left to the caller so the macro token can end
    /// before it.
    Newline,
    /// The `}` closing an interpolation section. Consumed, not emitted.
    ClosingBrace,
}

/// Converts normalized source text into tokens.
///
/// Line endings must already be normalized to `\n`.
pub struct Tokenizer<'src> {
    reader: Reader<'src>,
    mode: Mode,
    line: u32,
    line_start: u32,
    /// Output buffer of the innermost scan.
    tokens: Vec<Token>,
    /// Buffers of the enclosing scans, innermost last.
    pending: Vec<Vec<Token>>,
    /// Start offset of the innermost macro body or interpolation section.
    scope_start: u32,
    in_macro: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_mode(source, Mode::None)
    }

    /// Start in `mode` instead of plain source, e.g. to tokenize a bare
    /// macro body.
    pub fn with_mode(source: &'src str, mode: Mode) -> Self {
        Tokenizer {
            reader: Reader::new(source),
            mode,
            line: 0,
            line_start: 0,
            tokens: Vec::new(),
            pending: Vec::new(),
            scope_start: 0,
            in_macro: mode == Mode::Macro,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Scan until the initial mode's termination rule fires.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        self.run()?;
        Ok(self.tokens)
    }

    /// [`scan`](Self::scan), then append a synthetic `Eof` token at the
    /// final reader position.
    pub fn scan_to_end(mut self) -> Result<Vec<Token>, LexError> {
        self.run()?;
        let end = self.position();
        self.tokens.push(Token::new(TokenKind::Eof, end, end));
        Ok(self.tokens)
    }

    fn run(&mut self) -> Result<(), LexError> {
        if u32::try_from(self.reader.len()).is_err() {
            return Err(LexError::source_too_large());
        }
        let exit = ensure_sufficient_stack(|| self.scan_body())?;
        debug!(count = self.tokens.len(), ?exit, "scan complete");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Bookkeeping
    // ─────────────────────────────────────────────────────────────────────

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scan rejects sources longer than u32::MAX"
    )]
    fn offset(&self) -> u32 {
        self.reader.tell() as u32
    }

    #[inline]
    fn position(&self) -> Position {
        Position::new(self.offset(), self.line, self.line_start)
    }

    /// Position on the current line at an earlier `offset`.
    #[inline]
    fn position_at(&self, offset: u32) -> Position {
        Position::new(offset, self.line, self.line_start)
    }

    /// Record that the reader just moved past a `\n`.
    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.offset();
    }

    /// Emit a token running from `begin` to the current position.
    #[inline]
    fn push(&mut self, kind: TokenKind, begin: Position) {
        let end = self.position();
        self.tokens.push(Token::new(kind, begin, end));
    }

    /// What the innermost scan is inside of, for error reports.
    fn error_context(&self) -> LexErrorContext {
        match self.mode {
            Mode::None => LexErrorContext::TopLevel,
            Mode::Macro => LexErrorContext::MacroBody {
                start: self.scope_start,
            },
            Mode::Template => LexErrorContext::Interpolation {
                start: self.scope_start,
            },
        }
    }

    /// Consume the newline ending a line comment or region marker.
    ///
    /// Inside a macro body this also ends the body.
    fn finish_line(&mut self) -> Option<Exit> {
        if !self.reader.try_consume_char('\n') {
            return None;
        }
        if self.mode == Mode::Macro {
            return Some(Exit::Newline);
        }
        self.new_line();
        None
    }

    // ─────────────────────────────────────────────────────────────────────
    // Recursive sub-scans
    // ─────────────────────────────────────────────────────────────────────

    /// Scan a macro body or interpolation section into its own token list.
    fn scan_nested(&mut self, mode: Mode, scope_start: u32) -> Result<(Vec<Token>, Exit), LexError> {
        let outer_mode = mem::replace(&mut self.mode, mode);
        let outer_scope = mem::replace(&mut self.scope_start, scope_start);
        self.pending.push(mem::take(&mut self.tokens));
        trace!(?mode, depth = self.pending.len(), "enter sub-scan");

        let result = ensure_sufficient_stack(|| self.scan_body());

        let outer_tokens = self.pending.pop().unwrap_or_default();
        let body = mem::replace(&mut self.tokens, outer_tokens);
        self.mode = outer_mode;
        self.scope_start = outer_scope;

        let exit = result?;
        trace!(?mode, ?exit, count = body.len(), "leave sub-scan");
        Ok((body, exit))
    }

    /// The main loop: one token per iteration until the mode's exit rule.
    fn scan_body(&mut self) -> Result<Exit, LexError> {
        // `{` nesting inside an interpolation section.
        let mut depth: u32 = 0;
        loop {
            self.reader.eat_whitespace();
            let begin = self.position();
            let Some(c) = self.reader.read() else {
                return match self.mode {
                    Mode::Template => Err(LexError::unclosed_interpolation(
                        begin,
                        self.scope_start,
                    )),
                    Mode::None | Mode::Macro => Ok(Exit::EndOfInput),
                };
            };

            match c {
                '\n' => {
                    if self.mode == Mode::Macro {
                        return Ok(Exit::Newline);
                    }
                    self.push(TokenKind::Newline, begin);
                    self.new_line();
                }
                '\\' => self.continuator(begin)?,

                // Strings
                '"' => {
                    if self.mode == Mode::Template && depth == 0 {
                        return Err(LexError::quote_in_interpolation(begin, self.scope_start));
                    }
                    self.string_literal(begin)?;
                }
                '@' if matches!(self.reader.peek(), Some('"' | '\'')) => {
                    self.raw_string_literal(begin)?;
                }
                '$' if self.reader.try_consume_char('"') => self.template_literal(begin)?,

                // Prefixed integers
                '$' if self.reader.peek().is_some_and(chars::is_hex_digit) => {
                    self.radix_literal(begin, 16)?;
                }
                '0' if self.reader.try_consume_any("xX") => self.radix_literal(begin, 16)?,
                '0' if self.reader.try_consume_any("bB") => self.radix_literal(begin, 2)?,

                '#' => {
                    if let Some(exit) = self.directive(begin)? {
                        return Ok(exit);
                    }
                }

                // Punctuation
                ',' => self.push(TokenKind::Comma, begin),
                ';' => self.push(TokenKind::Semicolon, begin),
                ':' => self.push(TokenKind::Colon, begin),
                '.' => {
                    let digit_follows = self.reader.peek().is_some_and(|c| c.is_ascii_digit());
                    if digit_follows && !self.follows_float(begin) {
                        self.reader.rewind();
                        self.number_literal(begin)?;
                    } else {
                        self.push(TokenKind::Dot, begin);
                    }
                }
                '{' => {
                    if self.mode == Mode::Template {
                        depth += 1;
                    }
                    self.push(TokenKind::LCurly(Spelling::Symbol), begin);
                }
                '}' => {
                    if self.mode == Mode::Template {
                        if depth == 0 {
                            return Ok(Exit::ClosingBrace);
                        }
                        depth -= 1;
                    }
                    self.push(TokenKind::RCurly(Spelling::Symbol), begin);
                }
                '(' => self.push(TokenKind::LParen, begin),
                ')' => self.push(TokenKind::RParen, begin),
                '[' => self.bracket(begin),
                ']' => self.push(TokenKind::RBracket, begin),

                // Operators
                '~' => self.push(TokenKind::BitNot, begin),
                '?' => {
                    if self.reader.try_consume_char('?') {
                        self.operator(begin, InPlaceOp::Nullish, TokenKind::Nullish);
                    } else {
                        self.push(TokenKind::Question, begin);
                    }
                }
                '&' => self.doubled_or_operator(
                    begin,
                    '&',
                    TokenKind::LogicAnd(Spelling::Symbol),
                    InPlaceOp::BitAnd,
                    TokenKind::BitAnd,
                ),
                '|' => self.doubled_or_operator(
                    begin,
                    '|',
                    TokenKind::LogicOr(Spelling::Symbol),
                    InPlaceOp::BitOr,
                    TokenKind::BitOr,
                ),
                '^' => self.doubled_or_operator(
                    begin,
                    '^',
                    TokenKind::LogicXor(Spelling::Symbol),
                    InPlaceOp::BitXor,
                    TokenKind::BitXor,
                ),
                '+' => {
                    self.doubled_or_operator(begin, '+', TokenKind::Incr, InPlaceOp::Plus, TokenKind::Plus);
                }
                '-' => {
                    self.doubled_or_operator(begin, '-', TokenKind::Decr, InPlaceOp::Minus, TokenKind::Minus);
                }
                '*' => self.operator(begin, InPlaceOp::Mul, TokenKind::Mul),
                '%' => self.operator(begin, InPlaceOp::Mod, TokenKind::Mod),
                '=' => {
                    let kind = if self.reader.try_consume_char('=') {
                        TokenKind::Equality
                    } else {
                        TokenKind::Equals
                    };
                    self.push(kind, begin);
                }
                '!' => {
                    let kind = if self.reader.try_consume_char('=') {
                        TokenKind::Inequality
                    } else {
                        TokenKind::LogicNot(Spelling::Symbol)
                    };
                    self.push(kind, begin);
                }
                '<' => {
                    if self.reader.try_consume_char('<') {
                        self.operator(begin, InPlaceOp::ShiftLeft, TokenKind::ShiftLeft);
                    } else if self.reader.try_consume_char('=') {
                        self.push(TokenKind::LessEqual, begin);
                    } else if self.reader.try_consume_char('>') {
                        self.push(TokenKind::Inequality, begin);
                    } else {
                        self.push(TokenKind::LessThan, begin);
                    }
                }
                '>' => {
                    if self.reader.try_consume_char('>') {
                        self.operator(begin, InPlaceOp::ShiftRight, TokenKind::ShiftRight);
                    } else if self.reader.try_consume_char('=') {
                        self.push(TokenKind::GreaterEqual, begin);
                    } else {
                        self.push(TokenKind::GreaterThan, begin);
                    }
                }
                '/' => {
                    if self.reader.try_consume_char('/') {
                        if let Some(exit) = self.line_comment(begin) {
                            return Ok(exit);
                        }
                    } else if self.reader.try_consume_char('*') {
                        self.block_comment(begin)?;
                    } else {
                        self.operator(begin, InPlaceOp::Div, TokenKind::Div);
                    }
                }

                c if chars::is_ident_start(c) => {
                    self.reader.rewind();
                    self.identifier(begin);
                }
                c if c.is_ascii_digit() => {
                    self.reader.rewind();
                    self.number_literal(begin)?;
                }

                // Unknown sigils are skipped without a token.
                _ => {}
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Small token families
    // ─────────────────────────────────────────────────────────────────────

    /// `op` or its in-place form `op=`.
    #[inline]
    fn operator(&mut self, begin: Position, op: InPlaceOp, plain: TokenKind) {
        let kind = if self.reader.try_consume_char('=') {
            TokenKind::InPlace(op)
        } else {
            plain
        };
        self.push(kind, begin);
    }

    /// `cc` for a doubled character, otherwise `c` or `c=`.
    ///
    /// The doubled form wins, so `++=` is `++` then `=`.
    #[inline]
    fn doubled_or_operator(
        &mut self,
        begin: Position,
        c: char,
        doubled: TokenKind,
        op: InPlaceOp,
        plain: TokenKind,
    ) {
        if self.reader.try_consume_char(c) {
            self.push(doubled, begin);
        } else {
            self.operator(begin, op, plain);
        }
    }

    /// `[` or a typed accessor such as `[|` or `[B:`.
    fn bracket(&mut self, begin: Position) {
        let reader = &mut self.reader;
        let accessor = AccessorKind::ALL
            .into_iter()
            .find(|kind| reader.match_literal(kind.marker()));
        let kind = accessor.map_or(TokenKind::LBracket, TokenKind::Accessor);
        self.push(kind, begin);
    }

    /// `\` joins macro body lines and is an error anywhere else.
    fn continuator(&mut self, begin: Position) -> Result<(), LexError> {
        if self.mode != Mode::Macro {
            let err = LexError::unexpected_continuator(begin);
            return Err(err.with_context(self.error_context()));
        }
        if !self.reader.try_consume_char('\n') {
            return Err(LexError::continuator_without_newline(
                begin,
                self.scope_start,
            ));
        }
        self.push(TokenKind::Newline, begin);
        self.new_line();
        Ok(())
    }

    fn identifier(&mut self, begin: Position) {
        let text = self.reader.consume_while(chars::is_ident_continue);
        let kind = keywords::lookup(text).unwrap_or_else(|| TokenKind::Identifier(text.to_owned()));
        self.push(kind, begin);
    }

    /// Whether a float literal ends exactly at `begin`.
    ///
    /// A `.` right after a float is a DOT, so `1..2` lexes as `1.` `.` `2`.
    fn follows_float(&self, begin: Position) -> bool {
        matches!(
            self.tokens.last(),
            Some(Token {
                kind: TokenKind::Literal(Literal::Number(NumberLiteral {
                    radix: NumberRadix::Float,
                    ..
                })),
                end,
                ..
            }) if end.offset == begin.offset
        )
    }
}
