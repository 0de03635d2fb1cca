use super::*;
use coyote_ir::TokenTag;
use pretty_assertions::assert_eq;

#[test]
fn word_operators() {
    assert_eq!(lookup("begin"), Some(TokenKind::LCurly(Spelling::Word)));
    assert_eq!(lookup("end"), Some(TokenKind::RCurly(Spelling::Word)));
    assert_eq!(lookup("div"), Some(TokenKind::IntDiv));
    assert_eq!(lookup("mod"), Some(TokenKind::IntMod));
    assert_eq!(lookup("xor"), Some(TokenKind::LogicXor(Spelling::Word)));
}

#[test]
fn named_literals() {
    assert_eq!(
        lookup("false"),
        Some(TokenKind::Literal(Literal::Boolean(false)))
    );
    assert_eq!(
        lookup("self"),
        Some(TokenKind::Literal(Literal::SelfInstance))
    );
    assert_eq!(
        lookup("undefined"),
        Some(TokenKind::Literal(Literal::Undefined))
    );
}

#[test]
fn every_keyword_resolves_to_itself() {
    for kw in Keyword::ALL {
        assert_eq!(lookup(kw.as_str()), Some(TokenKind::Keyword(kw)));
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("TRUE"), None);
}

#[test]
fn identifiers_miss() {
    assert_eq!(lookup("speed"), None);
    assert_eq!(lookup("ends"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn table_size_matches_categories() {
    let table = keyword_table();
    let words = table
        .values()
        .filter(|k| k.tag() != TokenTag::Keyword && k.tag() != TokenTag::Literal)
        .count();
    assert_eq!(words, 8);
    assert_eq!(table.len(), 8 + 8 + Keyword::ALL.len());
}

#[test]
fn table_is_a_singleton() {
    assert!(std::ptr::eq(keyword_table(), keyword_table()));
}
