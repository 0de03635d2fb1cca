//! Keyword table.
//!
//! Maps identifier spellings to the token they lex as: control-flow and
//! declaration keywords, word-form operators (`begin`, `end`, `div`, `mod`,
//! `not`, `and`, `or`, `xor`) and named literals (`true`, `self`, `noone`
//! and friends). Built once on first use and read-only afterwards.

use std::sync::OnceLock;

use coyote_ir::{Keyword, Literal, Spelling, TokenKind};
use rustc_hash::FxHashMap;

type KeywordMap = FxHashMap<&'static str, TokenKind>;

static KEYWORDS: OnceLock<KeywordMap> = OnceLock::new();

fn build() -> KeywordMap {
    let mut map = KeywordMap::default();

    map.insert("begin", TokenKind::LCurly(Spelling::Word));
    map.insert("end", TokenKind::RCurly(Spelling::Word));
    map.insert("div", TokenKind::IntDiv);
    map.insert("mod", TokenKind::IntMod);
    map.insert("not", TokenKind::LogicNot(Spelling::Word));
    map.insert("and", TokenKind::LogicAnd(Spelling::Word));
    map.insert("or", TokenKind::LogicOr(Spelling::Word));
    map.insert("xor", TokenKind::LogicXor(Spelling::Word));

    let literals = [
        ("all", Literal::All),
        ("self", Literal::SelfInstance),
        ("true", Literal::Boolean(true)),
        ("false", Literal::Boolean(false)),
        ("other", Literal::Other),
        ("noone", Literal::Noone),
        ("global", Literal::Global),
        ("undefined", Literal::Undefined),
    ];
    for (text, lit) in literals {
        map.insert(text, TokenKind::Literal(lit));
    }

    for kw in Keyword::ALL {
        map.insert(kw.as_str(), TokenKind::Keyword(kw));
    }
    map
}

/// Get the global keyword table (lazily initialized).
pub fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    KEYWORDS.get_or_init(build)
}

/// Token for a reserved spelling, or `None` for a plain identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    keyword_table().get(text).cloned()
}

#[cfg(test)]
mod tests;
