use super::*;
use crate::chars::{is_decimal_digit, is_ident_continue};
use pretty_assertions::assert_eq;

// === Peek / Read ===

#[test]
fn peek_does_not_advance() {
    let reader = Reader::new("abc");
    assert_eq!(reader.peek(), Some('a'));
    assert_eq!(reader.peek(), Some('a'));
    assert_eq!(reader.tell(), 0);
}

#[test]
fn peek_nth_looks_ahead() {
    let reader = Reader::new("abc");
    assert_eq!(reader.peek_nth(0), Some('a'));
    assert_eq!(reader.peek_nth(2), Some('c'));
    assert_eq!(reader.peek_nth(3), None);
    assert_eq!(reader.peek_nth(100), None);
}

#[test]
fn read_advances_and_stops_at_end() {
    let mut reader = Reader::new("hi");
    assert_eq!(reader.read(), Some('h'));
    assert_eq!(reader.read(), Some('i'));
    assert_eq!(reader.read(), None);
    assert_eq!(reader.read(), None);
    assert_eq!(reader.tell(), 2);
    assert!(reader.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let mut reader = Reader::new("");
    assert!(reader.is_eof());
    assert!(reader.is_empty());
    assert_eq!(reader.peek(), None);
    assert_eq!(reader.read(), None);
}

#[test]
fn multibyte_offsets_are_bytes() {
    let mut reader = Reader::new("é1");
    assert_eq!(reader.read(), Some('é'));
    assert_eq!(reader.tell(), 2);
    assert_eq!(reader.read(), Some('1'));
    assert_eq!(reader.tell(), 3);
}

// === Skip / Rewind / Seek ===

#[test]
fn skip_stops_at_end() {
    let mut reader = Reader::new("abc");
    reader.skip(2);
    assert_eq!(reader.peek(), Some('c'));
    reader.skip(10);
    assert!(reader.is_eof());
}

#[test]
fn rewind_undoes_one_read() {
    let mut reader = Reader::new("a€b");
    reader.read();
    reader.read();
    assert_eq!(reader.tell(), 4);
    reader.rewind();
    assert_eq!(reader.tell(), 1);
    assert_eq!(reader.peek(), Some('€'));
}

#[test]
fn rewind_at_start_is_noop() {
    let mut reader = Reader::new("a");
    reader.rewind();
    assert_eq!(reader.tell(), 0);
}

#[test]
fn seek_returns_to_saved_position() {
    let mut reader = Reader::new("region");
    let mark = reader.tell();
    reader.skip(3);
    reader.seek(mark);
    assert_eq!(reader.remaining(), "region");
}

// === Conditional consumption ===

#[test]
fn try_consume_matches_only_current() {
    let mut reader = Reader::new("=>");
    assert!(!reader.try_consume_char('>'));
    assert!(reader.try_consume_char('='));
    assert!(reader.try_consume_any("<>"));
    assert!(!reader.try_consume_any("<>"));
    assert!(reader.is_eof());
}

#[test]
fn try_consume_with_predicate() {
    let mut reader = Reader::new("7x");
    assert!(reader.try_consume(|c| c.is_ascii_digit()));
    assert!(!reader.try_consume(|c| c.is_ascii_digit()));
    assert_eq!(reader.tell(), 1);
}

#[test]
fn consume_while_returns_run() {
    let mut reader = Reader::new("1_000.5");
    assert_eq!(reader.consume_while(is_decimal_digit), "1_000");
    assert_eq!(reader.peek(), Some('.'));
}

#[test]
fn consume_while_no_match_is_empty() {
    let mut reader = Reader::new("+x");
    assert_eq!(reader.consume_while(is_ident_continue), "");
    assert_eq!(reader.tell(), 0);
}

#[test]
fn consume_until_excludes_terminator() {
    let mut reader = Reader::new("abc;def");
    assert_eq!(reader.consume_until(|c| c == ';', false), "abc");
    assert_eq!(reader.peek(), Some(';'));
}

#[test]
fn consume_until_inclusive_skips_terminator() {
    let mut reader = Reader::new("abc;def");
    assert_eq!(reader.consume_until(|c| c == ';', true), "abc");
    assert_eq!(reader.peek(), Some('d'));
}

#[test]
fn consume_until_inclusive_at_eof() {
    let mut reader = Reader::new("abc");
    assert_eq!(reader.consume_until(|c| c == ';', true), "abc");
    assert!(reader.is_eof());
    assert_eq!(reader.tell(), 3);
}

#[test]
fn match_literal_is_all_or_nothing() {
    let mut reader = Reader::new("B:idx]");
    assert!(!reader.match_literal("B;"));
    assert_eq!(reader.tell(), 0);
    assert!(reader.match_literal("B:"));
    assert_eq!(reader.remaining(), "idx]");
}

#[test]
fn match_literal_past_end_fails() {
    let mut reader = Reader::new("B");
    assert!(!reader.match_literal("B:"));
    assert_eq!(reader.tell(), 0);
}

// === Whitespace / lines ===

#[test]
fn eat_whitespace_keeps_newline() {
    let mut reader = Reader::new(" \t\u{0B}\u{0C}\nx");
    reader.eat_whitespace();
    assert_eq!(reader.peek(), Some('\n'));
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut reader = Reader::new(" comment\nnext");
    assert_eq!(reader.eat_until_newline(), " comment");
    assert_eq!(reader.peek(), Some('\n'));
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let mut reader = Reader::new("trailing");
    assert_eq!(reader.eat_until_newline(), "trailing");
    assert!(reader.is_eof());
}

// === Slicing ===

#[test]
fn slice_from_mark() {
    let mut reader = Reader::new("hello world");
    reader.skip(5);
    assert_eq!(reader.slice_from(0), "hello");
    assert_eq!(reader.slice(6, 11), "world");
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_reader {
    use super::super::Reader;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn read_rewind_roundtrip(text in "\\PC{0,40}", steps in 0usize..40) {
            let mut reader = Reader::new(&text);
            reader.skip(steps);
            let pos = reader.tell();
            if let Some(c) = reader.read() {
                reader.rewind();
                prop_assert_eq!(reader.tell(), pos);
                prop_assert_eq!(reader.peek(), Some(c));
            }
        }

        #[test]
        fn consume_while_then_until_covers_source(text in "[a-z ]{0,40}") {
            let mut reader = Reader::new(&text);
            let mut rebuilt = String::new();
            while reader.has_remaining() {
                rebuilt.push_str(reader.consume_while(|c| c != ' '));
                rebuilt.push_str(reader.consume_until(|c| c != ' ', false));
            }
            prop_assert_eq!(rebuilt, text);
        }
    }
}
