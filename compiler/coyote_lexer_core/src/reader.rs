//! Bounded cursor over normalized source text.
//!
//! The reader walks the source one code point at a time while keeping its
//! position as a UTF-8 byte offset, so every position it hands out can be
//! used to slice the original `&str` directly.
//!
//! Reads past the end never fail: [`Reader::peek`] and [`Reader::read`]
//! return `None` at end of input and leave the position unchanged.

/// Cursor over a borrowed source string.
///
/// The position always sits on a `char` boundary. The reader is not
/// [`Copy`]: the tokenizer owns exactly one and threads it through every
/// recursive sub-scan by `&mut`.
#[derive(Clone, Debug)]
pub struct Reader<'src> {
    text: &'src str,
    pos: usize,
}

impl<'src> Reader<'src> {
    pub fn new(text: &'src str) -> Self {
        Self { text, pos: 0 }
    }

    /// The full source text, independent of the read position.
    #[inline]
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Current byte offset.
    #[inline]
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Move to an absolute byte offset.
    ///
    /// # Contract
    ///
    /// `pos` must be `<= len()` and on a `char` boundary. Offsets obtained
    /// from [`tell()`](Self::tell) always satisfy this.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(
            self.text.is_char_boundary(pos),
            "seek target {pos} is not a char boundary"
        );
        self.pos = pos;
    }

    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.pos < self.text.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        !self.has_remaining()
    }

    /// Unread text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'src str {
        &self.text[self.pos..]
    }

    /// The character at the current position.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character `n` code points ahead of the current position.
    ///
    /// `peek_nth(0)` is equivalent to [`peek()`](Self::peek).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Return the current character and advance past it.
    #[inline]
    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance by up to `n` characters, stopping at end of input.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.read().is_none() {
                break;
            }
        }
    }

    /// Step back exactly one character.
    ///
    /// Undoes the most recent [`read()`](Self::read) so the tokenizer can
    /// re-dispatch a character it already looked at. No-op at offset 0.
    #[inline]
    pub fn rewind(&mut self) {
        if let Some(c) = self.text[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
        }
    }

    /// Advance past the current character if `pred` accepts it.
    #[inline]
    pub fn try_consume(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Advance past the current character if it equals `expected`.
    #[inline]
    pub fn try_consume_char(&mut self, expected: char) -> bool {
        self.try_consume(|c| c == expected)
    }

    /// Advance past the current character if it is any of `set`.
    #[inline]
    pub fn try_consume_any(&mut self, set: &str) -> bool {
        self.try_consume(|c| set.contains(c))
    }

    /// Advance while `pred` holds, returning the consumed text.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while self.try_consume(&pred) {}
        &self.text[start..self.pos]
    }

    /// Advance until `pred` holds (or end of input), returning the text
    /// before the terminating character.
    ///
    /// With `inclusive`, the terminator is also consumed. It is never part
    /// of the returned text.
    pub fn consume_until(&mut self, pred: impl Fn(char) -> bool, inclusive: bool) -> &'src str {
        let start = self.pos;
        while self.try_consume(|c| !pred(c)) {}
        let consumed = &self.text[start..self.pos];
        if inclusive {
            self.read();
        }
        consumed
    }

    /// Advance past `seq` only if the upcoming text matches it exactly.
    #[inline]
    pub fn match_literal(&mut self, seq: &str) -> bool {
        if self.remaining().starts_with(seq) {
            self.pos += seq.len();
            true
        } else {
            false
        }
    }

    /// Skip horizontal whitespace (space, tab, vertical tab, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while self.try_consume(crate::chars::is_horizontal_whitespace) {}
    }

    /// Advance to the next `\n` (not consumed) or end of input, returning
    /// the skipped text.
    ///
    /// Used for line comments and region markers.
    pub fn eat_until_newline(&mut self) -> &'src str {
        let start = self.pos;
        self.pos = match memchr::memchr(b'\n', self.remaining().as_bytes()) {
            Some(offset) => start + offset,
            None => self.text.len(),
        };
        &self.text[start..self.pos]
    }

    /// Source text between two byte offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start..end]
    }

    /// Source text from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
