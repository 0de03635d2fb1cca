use super::*;
use pretty_assertions::assert_eq;

fn pos(offset: u32) -> Position {
    Position::new(offset, 0, 0)
}

#[test]
fn token_text_slices_source() {
    let source = "x += 1";
    let tok = Token::new(TokenKind::InPlace(InPlaceOp::Plus), pos(2), pos(4));
    assert_eq!(tok.text(source), Some("+="));
    assert_eq!(tok.span(), Span::new(2, 4));
    assert_eq!(tok.tag(), TokenTag::InPlace);
}

#[test]
fn token_text_out_of_range_is_none() {
    let tok = Token::new(TokenKind::Dot, pos(10), pos(11));
    assert_eq!(tok.text("short"), None);
}

#[test]
fn word_and_symbol_spellings_share_tag() {
    assert_eq!(
        TokenKind::LCurly(Spelling::Word).tag(),
        TokenKind::LCurly(Spelling::Symbol).tag()
    );
    assert_ne!(
        TokenKind::LogicAnd(Spelling::Word),
        TokenKind::LogicAnd(Spelling::Symbol)
    );
}

#[test]
fn trivia_tags() {
    assert!(TokenTag::Comment.is_trivia());
    assert!(TokenTag::Newline.is_trivia());
    assert!(TokenTag::Region.is_trivia());
    assert!(!TokenTag::Macro.is_trivia());
    assert!(!TokenTag::Eof.is_trivia());
}

#[test]
fn in_place_base_has_in_place_form() {
    for op in [
        InPlaceOp::Plus,
        InPlaceOp::Minus,
        InPlaceOp::Mul,
        InPlaceOp::Div,
        InPlaceOp::Mod,
        InPlaceOp::BitAnd,
        InPlaceOp::BitOr,
        InPlaceOp::BitXor,
        InPlaceOp::ShiftLeft,
        InPlaceOp::ShiftRight,
        InPlaceOp::Nullish,
    ] {
        assert!(op.base().has_in_place_form(), "{op:?}");
    }
    assert!(!TokenTag::Equality.has_in_place_form());
}

#[test]
fn accessor_markers_are_distinct() {
    let mut markers: Vec<&str> = AccessorKind::ALL.iter().map(|a| a.marker()).collect();
    markers.sort_unstable();
    markers.dedup();
    assert_eq!(markers.len(), AccessorKind::ALL.len());
}

#[test]
fn keyword_spellings_are_lowercase_idents() {
    for kw in Keyword::ALL {
        let s = kw.as_str();
        assert!(s.chars().all(|c| c.is_ascii_lowercase()), "{s}");
    }
}

#[test]
fn number_display_uses_source_radix() {
    assert_eq!(NumberLiteral::int(31, NumberRadix::Hex).to_string(), "0x1F");
    assert_eq!(NumberLiteral::int(5, NumberRadix::Bin).to_string(), "0b101");
    assert_eq!(
        NumberLiteral::int(0x0080FF, NumberRadix::Colour).to_string(),
        "#0080FF"
    );
    assert_eq!(NumberLiteral::int(123, NumberRadix::Int).to_string(), "123");
    assert_eq!(NumberLiteral::float(1.5).to_string(), "1.5000");
}

#[test]
fn number_value_widens() {
    assert_eq!(NumberValue::Int(3).as_f64(), 3.0);
    assert_eq!(NumberValue::Float(0.5).as_f64(), 0.5);
}

#[test]
fn debug_shows_payload_and_span() {
    let tok = Token::new(
        TokenKind::Identifier("speed".into()),
        pos(0),
        pos(5),
    );
    assert_eq!(format!("{tok:?}"), "Identifier(\"speed\") @ 0..5");
    let tok = Token::new(TokenKind::LCurly(Spelling::Word), pos(0), pos(5));
    assert_eq!(format!("{tok:?}"), "LCurly(begin) @ 0..5");
    assert_eq!(format!("{:?}", TokenKind::Plus), "`+`");
}

#[test]
fn section_expression_excludes_braces() {
    let section = SectionSpan {
        absolute: Span::new(8, 13),
        relative: Span::new(3, 8),
    };
    assert_eq!(section.expression(), Span::new(9, 12));
}

#[test]
fn template_sections_pair_up() {
    let record = TemplateRecord {
        lexeme: "{a}{b}".into(),
        decoded: "01".into(),
        sections: vec![
            SectionSpan {
                absolute: Span::new(2, 5),
                relative: Span::new(0, 3),
            },
            SectionSpan {
                absolute: Span::new(5, 8),
                relative: Span::new(3, 6),
            },
        ],
        section_tokens: vec![
            vec![Token::new(TokenKind::Identifier("a".into()), pos(3), pos(4))],
            vec![Token::new(TokenKind::Identifier("b".into()), pos(6), pos(7))],
        ],
    };
    let pairs: Vec<_> = record.sections().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1].0.relative, Span::new(3, 6));
    assert_eq!(pairs[1].1[0].kind.as_identifier(), Some("b"));
}

#[test]
fn macro_record_helpers() {
    let record = MacroRecord {
        name: "FOO".into(),
        configuration: Some("windows".into()),
        body: Vec::new(),
        lexeme: "windows:FOO".into(),
        name_begin: pos(15),
        name_end: pos(18),
    };
    assert!(record.has_configuration());
    assert_eq!(record.name_span(), Span::new(15, 18));
    assert_eq!(MacroRecord::KEYWORD_LENGTH as usize, "#macro ".len());
}
