//! Source locations.
//!
//! Offsets are UTF-8 byte offsets into the normalized source, stored as
//! `u32`. The lexer rejects sources that do not fit before scanning.

use std::fmt;

/// Snapshot of the scanner's location.
///
/// `line` is zero-based. `line_start` is the offset of the first byte of
/// that line, so the column is derived rather than tracked.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub line_start: u32,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        line_start: 0,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, line_start: u32) -> Self {
        Position {
            offset,
            line,
            line_start,
        }
    }

    /// Zero-based byte column within the line.
    #[inline]
    pub const fn column(&self) -> u32 {
        self.offset - self.line_start
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self, self.offset)
    }
}

/// One-based `line:column`, the form shown to users.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column() + 1)
    }
}

/// Half-open byte range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Shift both ends towards zero by `base`.
    ///
    /// Converts an absolute span into one relative to a lexeme that starts
    /// at `base`.
    #[inline]
    #[must_use]
    pub const fn relative_to(self, base: u32) -> Span {
        Span {
            start: self.start - base,
            end: self.end - base,
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Position, Span};
    crate::static_assert_size!(Position, 12);
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_is_offset_from_line_start() {
        let pos = Position::new(17, 2, 10);
        assert_eq!(pos.column(), 7);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Position::START.to_string(), "1:1");
        assert_eq!(Position::new(17, 2, 10).to_string(), "3:8");
    }

    #[test]
    fn span_basics() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(15));
        assert!(!span.contains(20));
        assert_eq!(span.to_range(), 10..20);
    }

    #[test]
    fn span_relative_to_lexeme() {
        assert_eq!(Span::new(12, 19).relative_to(10), Span::new(2, 9));
    }
}
