use super::*;

#[test]
fn test_parse_int_skip_underscores() {
    assert_eq!(parse_int_skip_underscores("123", 10), Some(123));
    assert_eq!(parse_int_skip_underscores("1_000_000", 10), Some(1_000_000));
    assert_eq!(parse_int_skip_underscores("___1___", 10), Some(1));
}

#[test]
fn test_parse_int_hex_and_bin() {
    assert_eq!(parse_int_skip_underscores("1F", 16), Some(31));
    assert_eq!(parse_int_skip_underscores("dead_beef", 16), Some(0xdead_beef));
    assert_eq!(parse_int_skip_underscores("101", 2), Some(5));
    assert_eq!(parse_int_skip_underscores("1111_0000", 2), Some(0xF0));
}

#[test]
fn test_parse_int_overflow() {
    assert_eq!(
        parse_int_skip_underscores("18446744073709551615", 10),
        Some(u64::MAX)
    );
    assert_eq!(parse_int_skip_underscores("18446744073709551616", 10), None);
    assert_eq!(parse_int_skip_underscores("1_0000_0000_0000_0000", 16), None);
}

#[test]
fn test_parse_int_rejects_foreign_digit() {
    assert_eq!(parse_int_skip_underscores("12", 2), None);
}

#[test]
fn test_parse_float_forms() {
    assert_eq!(parse_float_skip_underscores("1.5"), Some(1.5));
    assert_eq!(parse_float_skip_underscores(".5"), Some(0.5));
    assert_eq!(parse_float_skip_underscores("1."), Some(1.0));
    assert_eq!(parse_float_skip_underscores("1_000.2_5"), Some(1000.25));
}

#[test]
fn test_count_digits_ignores_separators() {
    assert_eq!(count_digits("FF_00_80"), 6);
    assert_eq!(count_digits("12345"), 5);
    assert_eq!(count_digits("___"), 0);
}

#[test]
fn test_swap_colour() {
    assert_eq!(swap_colour(0xFF_00_80), 0x80_00_FF);
    assert_eq!(swap_colour(0x12_34_56), 0x56_34_12);
    assert_eq!(swap_colour(0x00_FF_00), 0x00_FF_00);
}
