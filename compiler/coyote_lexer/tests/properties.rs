//! Property-based tests for the tokenizer.
//!
//! Arbitrary input must never panic, and every token produced from
//! well-formed source must carry a span that slices back to a lexeme which
//! tokenizes to the same kind of token on its own.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    reason = "Proptest macros generate code with these patterns"
)]

use coyote_lexer::{scan, scan_to_end, Token};
use proptest::prelude::*;

// -- Source Generation Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").expect("valid regex")
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        (0u32..1000).prop_map(|n| format!(".{n}")),
        (0u32..0xFFFF).prop_map(|n| format!("0x{n:X}")),
        (0u32..0xFFFF).prop_map(|n| format!("${n:x}")),
        (0u32..64).prop_map(|n| format!("0b{n:b}")),
        (0u32..0xFF_FFFF).prop_map(|n| format!("#{n:06X}")),
    ]
}

fn fixed_fragment_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "++", "--", "+=", "<<=", "??=", "??", "?", "==", "!=", "<>",
        "<=", ">=", "<<", ">>", "&&", "||", "^^", "&", "|", "^", "~", "!", "=", ".", ",", ";",
        ":", "(", ")", "[", "]", "{", "}", "[|", "[?", "[#", "[@", "[$", "[B:", "[d:",
        "\"plain\"", "\"tab\\there\"", "@'raw\nlines'", "$\"v={a + 1}\"", "$\"{ {x} }!\"",
        "/* c /* d */ */", "/*\n*/", "// note\n", "\n", "#region Area\n", "#endregion\n",
        "#macro M 1 + 2\n", "#macro cfg:N a \\\n b\n",
    ])
    .prop_map(str::to_owned)
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        number_strategy(),
        fixed_fragment_strategy(),
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..24).prop_map(|parts| parts.join(" "))
}

// -- Helpers --

fn assert_well_placed(source: &str, tokens: &[Token]) {
    let mut last_begin = 0;
    for token in tokens {
        assert!(token.begin.offset <= token.end.offset, "{token:?}");
        assert!(token.begin.offset >= last_begin, "{token:?} out of order");
        assert!(
            token.text(source).is_some(),
            "{token:?} does not slice {source:?}"
        );
        last_begin = token.begin.offset;
    }
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        if let Ok(tokens) = scan(&source) {
            assert_well_placed(&source, &tokens);
        }
    }

    #[test]
    fn ascii_soup_never_panics(source in "[ -~\n]{0,64}") {
        if let Ok(tokens) = scan_to_end(&source) {
            assert_well_placed(&source, &tokens);
        }
    }

    #[test]
    fn generated_source_lexes(source in source_strategy()) {
        let tokens = scan(&source).unwrap();
        assert_well_placed(&source, &tokens);
    }

    #[test]
    fn lexemes_relex_to_same_tag(source in source_strategy()) {
        for token in scan(&source).unwrap() {
            let text = token.text(&source).unwrap();
            let relexed = scan(text).unwrap();
            prop_assert_eq!(relexed.len(), 1, "{:?} from {:?}", text, source);
            prop_assert_eq!(relexed[0].tag(), token.tag());
        }
    }

    #[test]
    fn positions_agree_with_newlines(source in source_strategy()) {
        for token in scan(&source).unwrap() {
            let before = &source[..token.begin.offset as usize];
            let line = before.matches('\n').count();
            let line_start = before.rfind('\n').map_or(0, |i| i + 1);
            prop_assert_eq!(token.begin.line as usize, line);
            prop_assert_eq!(token.begin.line_start as usize, line_start);
        }
    }

    #[test]
    fn rescanning_is_deterministic(source in source_strategy()) {
        prop_assert_eq!(scan(&source).unwrap(), scan(&source).unwrap());
    }
}
