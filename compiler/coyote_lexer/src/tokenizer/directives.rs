//! `#` directives, colour literals and comments.

use coyote_ir::{Comment, CommentKind, Literal, MacroRecord, NumberRadix, Position, Token, TokenKind};
use coyote_lexer_core::chars;

use super::{Exit, Mode, Tokenizer};
use crate::lex_error::LexError;
use crate::numeric::{count_digits, parse_int_skip_underscores, swap_colour};

/// Digits in a `#RRGGBB` colour.
const COLOUR_DIGITS: usize = 6;

impl Tokenizer<'_> {
    /// Everything introduced by `#`, which is already consumed.
    ///
    /// Returns an exit when a region marker ends the enclosing macro body.
    pub(super) fn directive(&mut self, begin: Position) -> Result<Option<Exit>, LexError> {
        let name = self.reader.consume_while(chars::is_ident_continue);
        match name {
            "region" => Ok(self.region(begin, true)),
            "endregion" => Ok(self.region(begin, false)),
            "macro" => {
                self.macro_directive(begin)?;
                Ok(None)
            }
            _ if name.chars().all(chars::is_hex_digit) => {
                self.colour_literal(begin, name)?;
                Ok(None)
            }
            _ => Err(LexError::unknown_directive(begin, name)),
        }
    }

    /// `#region` / `#endregion` and the rest of the line.
    fn region(&mut self, begin: Position, open: bool) -> Option<Exit> {
        self.reader.eat_whitespace();
        let text = self.reader.eat_until_newline().to_owned();
        let kind = if open {
            TokenKind::Region(text)
        } else {
            TokenKind::EndRegion(text)
        };
        self.push(kind, begin);
        self.finish_line()
    }

    /// `#RRGGBB`, stored with red and blue swapped.
    fn colour_literal(&mut self, begin: Position, digits: &str) -> Result<(), LexError> {
        let count = count_digits(digits);
        let reported = u32::try_from(count).unwrap_or(u32::MAX);
        if count < COLOUR_DIGITS {
            return Err(LexError::not_enough_colour_digits(begin, reported));
        }
        if count > COLOUR_DIGITS {
            return Err(LexError::too_many_colour_digits(begin, reported));
        }
        let rgb = parse_int_skip_underscores(digits, 16).ok_or_else(|| LexError::int_overflow(begin))?;
        let kind = TokenKind::Literal(Literal::int(swap_colour(rgb), NumberRadix::Colour));
        self.push(kind, begin);
        Ok(())
    }

    /// `#macro name body` or `#macro config:name body`.
    ///
    /// The body is scanned in `Macro` mode up to the first bare newline.
    /// The macro token ends before that newline.
    fn macro_directive(&mut self, begin: Position) -> Result<(), LexError> {
        if self.in_macro {
            return Err(LexError::nested_macro(begin, self.scope_start));
        }
        self.reader.eat_whitespace();

        let name_begin = self.position();
        let first = self.macro_identifier()?;
        let (configuration, name) = if self.reader.try_consume_char(':') {
            (Some(first), self.macro_identifier()?)
        } else {
            (None, first)
        };
        let name_end = self.position();

        self.in_macro = true;
        let result = self.scan_nested(Mode::Macro, name_begin.offset);
        self.in_macro = false;
        let (body, exit) = result?;

        let body_end = match exit {
            Exit::Newline => self.offset() - 1,
            Exit::EndOfInput | Exit::ClosingBrace => self.offset(),
        };
        let end = self.position_at(body_end);
        let lexeme = self
            .reader
            .slice(name_begin.offset as usize, body_end as usize)
            .to_owned();
        let record = MacroRecord {
            name,
            configuration,
            body,
            lexeme,
            name_begin,
            name_end,
        };
        self.tokens
            .push(Token::new(TokenKind::Macro(Box::new(record)), begin, end));

        if exit == Exit::Newline {
            self.new_line();
        }
        Ok(())
    }

    fn macro_identifier(&mut self) -> Result<String, LexError> {
        let at = self.position();
        match self.reader.peek() {
            None | Some('\n') => Err(LexError::macro_name_expected(at)),
            Some(c) if chars::is_ident_start(c) => {
                Ok(self.reader.consume_while(chars::is_ident_continue).to_owned())
            }
            Some(c) => Err(LexError::malformed_macro_identifier(at, c)),
        }
    }

    /// `// ...`, slashes already consumed.
    ///
    /// Returns an exit when the comment ends a macro body.
    pub(super) fn line_comment(&mut self, begin: Position) -> Option<Exit> {
        let text = self.reader.eat_until_newline();
        self.push(TokenKind::Comment(Comment::new(CommentKind::Line, text)), begin);
        self.finish_line()
    }

    /// `/* ... */` with nesting, opener already consumed.
    pub(super) fn block_comment(&mut self, begin: Position) -> Result<(), LexError> {
        let body_start = self.reader.tell();
        let mut depth: u32 = 0;
        loop {
            let here = self.position();
            match self.reader.read() {
                None => return Err(LexError::unterminated_block_comment(here, begin.offset)),
                Some('\n') => self.new_line(),
                Some('/') if self.reader.try_consume_char('*') => depth += 1,
                Some('*') if self.reader.try_consume_char('/') => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(_) => {}
            }
        }

        let text = self.reader.slice(body_start, self.reader.tell() - 2);
        self.push(TokenKind::Comment(Comment::new(CommentKind::Block, text)), begin);
        Ok(())
    }
}
