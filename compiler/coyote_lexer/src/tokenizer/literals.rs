//! String, template and numeric literals.

use coyote_ir::{
    Literal, NumberLiteral, NumberRadix, Position, SectionSpan, Span, TemplateRecord, TokenKind,
};
use coyote_lexer_core::chars;

use super::{Mode, Tokenizer};
use crate::escape::decode_escapes;
use crate::lex_error::{LexError, LexErrorContext};
use crate::numeric::{count_digits, parse_float_skip_underscores, parse_int_skip_underscores};

impl Tokenizer<'_> {
    /// Skip the character after a `\` while hunting for a closing quote.
    ///
    /// A newline or end of input is left for the caller to report.
    #[inline]
    fn skip_escaped(&mut self) {
        if self.reader.peek().is_some_and(|c| c != '\n') {
            self.reader.read();
        }
    }

    /// `"..."`, opening quote already consumed.
    pub(super) fn string_literal(&mut self, begin: Position) -> Result<(), LexError> {
        let body_start = self.reader.tell();
        loop {
            let here = self.position();
            match self.reader.read() {
                None => return Err(LexError::unterminated_string(here, begin.offset)),
                Some('\n') => return Err(LexError::newline_in_string(here, begin.offset)),
                Some('"') => break,
                Some('\\') => self.skip_escaped(),
                Some(_) => {}
            }
        }

        let body = self.reader.slice(body_start, self.reader.tell() - 1);
        let decoded = decode_escapes(body).map_err(|err| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "scan rejects sources longer than u32::MAX"
            )]
            let at = self.position_at((body_start + err.offset) as u32);
            LexError::escape(
                at,
                &err,
                LexErrorContext::InsideString {
                    start: begin.offset,
                },
            )
        })?;
        let kind = TokenKind::Literal(Literal::String(decoded.into_owned()));
        self.push(kind, begin);
        Ok(())
    }

    /// `@"..."` or `@'...'`, positioned on the quote.
    ///
    /// No escapes; may span lines.
    pub(super) fn raw_string_literal(&mut self, begin: Position) -> Result<(), LexError> {
        let Some(quote) = self.reader.read() else {
            return Err(LexError::unterminated_raw_string(begin, begin.offset, '"'));
        };
        let body_start = self.reader.tell();
        loop {
            let here = self.position();
            match self.reader.read() {
                None => {
                    return Err(LexError::unterminated_raw_string(
                        here,
                        begin.offset,
                        quote,
                    ))
                }
                Some('\n') => self.new_line(),
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }

        let body = self.reader.slice(body_start, self.reader.tell() - 1);
        self.push(TokenKind::Literal(Literal::String(body.to_owned())), begin);
        Ok(())
    }

    /// `$"..."`, `$"` already consumed.
    ///
    /// Every `{` opens an interpolation section scanned in `Template` mode;
    /// the nested scan returns after consuming the matching `}`.
    pub(super) fn template_literal(&mut self, begin: Position) -> Result<(), LexError> {
        let body_start = self.reader.tell();
        let mut sections = Vec::new();
        let mut section_tokens = Vec::new();
        loop {
            let here = self.position();
            match self.reader.read() {
                None => return Err(LexError::unterminated_template(here, begin.offset)),
                Some('\n') => return Err(LexError::newline_in_template(here, begin.offset)),
                Some('"') => break,
                // Only `\"` and `\\` are skipped; `\{` still opens a section.
                Some('\\') => {
                    self.reader.try_consume_any("\"\\");
                }
                Some('{') => {
                    let (tokens, _) = self.scan_nested(Mode::Template, here.offset)?;
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "scan rejects sources longer than u32::MAX"
                    )]
                    let base = body_start as u32;
                    let absolute = Span::new(here.offset, self.offset());
                    sections.push(SectionSpan {
                        absolute,
                        relative: absolute.relative_to(base),
                    });
                    section_tokens.push(tokens);
                }
                Some(_) => {}
            }
        }

        let lexeme = self.reader.slice(body_start, self.reader.tell() - 1);
        let mut fixed_up = lexeme.to_owned();
        for (index, section) in sections.iter().enumerate().rev() {
            fixed_up.replace_range(section.relative.to_range(), &index.to_string());
        }
        let decoded = decode_escapes(&fixed_up)
            .map_err(|err| {
                LexError::escape(
                    begin,
                    &err,
                    LexErrorContext::InsideTemplate {
                        start: begin.offset,
                    },
                )
            })?
            .into_owned();

        let record = TemplateRecord {
            lexeme: lexeme.to_owned(),
            decoded,
            sections,
            section_tokens,
        };
        self.push(TokenKind::Literal(Literal::Template(Box::new(record))), begin);
        Ok(())
    }

    /// Decimal integer or float, reader positioned on its first character.
    ///
    /// Either digit group of a float may be empty: `.5` and `1.` are both
    /// floats.
    pub(super) fn number_literal(&mut self, begin: Position) -> Result<(), LexError> {
        let start = self.reader.tell();
        self.reader.consume_while(chars::is_decimal_digit);
        let is_float = self.reader.try_consume_char('.');
        if is_float {
            self.reader.consume_while(chars::is_decimal_digit);
        }
        let text = self.reader.slice_from(start);

        let literal = if is_float {
            parse_float_skip_underscores(text)
                .map(NumberLiteral::float)
                .ok_or_else(|| LexError::missing_digits(begin, "decimal"))?
        } else {
            parse_int_skip_underscores(text, 10)
                .map(|v| NumberLiteral::int(v, NumberRadix::Int))
                .ok_or_else(|| LexError::int_overflow(begin))?
        };
        self.push(TokenKind::Literal(Literal::Number(literal)), begin);
        Ok(())
    }

    /// Digits after `$`, `0x` or `0b`.
    pub(super) fn radix_literal(&mut self, begin: Position, radix: u32) -> Result<(), LexError> {
        let (is_digit, name, tag): (fn(char) -> bool, _, _) = if radix == 16 {
            (chars::is_hex_digit, "hexadecimal", NumberRadix::Hex)
        } else {
            (chars::is_bin_digit, "binary", NumberRadix::Bin)
        };
        let digits = self.reader.consume_while(is_digit);
        if count_digits(digits) == 0 {
            return Err(LexError::missing_digits(begin, name));
        }
        let value =
            parse_int_skip_underscores(digits, radix).ok_or_else(|| LexError::int_overflow(begin))?;
        self.push(TokenKind::Literal(Literal::int(value, tag)), begin);
        Ok(())
    }
}
