//! Compact discriminant tag for `TokenKind`.

/// Payload-free discriminant for `TokenKind`.
///
/// This is what "kind" means when two tokens are compared without looking
/// at their payloads. Fits in a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenTag {
    // === Grouping ===
    LCurly,
    RCurly,
    LBracket,
    RBracket,
    LParen,
    RParen,

    // === Arithmetic ===
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    IntDiv,
    IntMod,
    Incr,
    Decr,

    // === Punctuation ===
    Equals,
    Dot,
    Comma,
    Semicolon,
    Colon,
    Question,

    // === Comparison ===
    Equality,
    Inequality,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,

    // === Logical ===
    LogicNot,
    LogicAnd,
    LogicOr,
    LogicXor,
    Nullish,

    // === Bitwise ===
    BitNot,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,

    InPlace,
    Accessor,

    // === Payload-bearing ===
    Literal,
    Identifier,
    Keyword,

    // === Trivia and directives ===
    Comment,
    Region,
    EndRegion,
    Macro,
    Newline,
    Eof,
}

impl TokenTag {
    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LCurly => "`{`",
            Self::RCurly => "`}`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Mul => "`*`",
            Self::Div => "`/`",
            Self::Mod => "`%`",
            Self::IntDiv => "`div`",
            Self::IntMod => "`mod`",
            Self::Incr => "`++`",
            Self::Decr => "`--`",
            Self::Equals => "`=`",
            Self::Dot => "`.`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::Colon => "`:`",
            Self::Question => "`?`",
            Self::Equality => "`==`",
            Self::Inequality => "`!=`",
            Self::LessThan => "`<`",
            Self::LessEqual => "`<=`",
            Self::GreaterThan => "`>`",
            Self::GreaterEqual => "`>=`",
            Self::LogicNot => "`!`",
            Self::LogicAnd => "`&&`",
            Self::LogicOr => "`||`",
            Self::LogicXor => "`^^`",
            Self::Nullish => "`??`",
            Self::BitNot => "`~`",
            Self::BitAnd => "`&`",
            Self::BitOr => "`|`",
            Self::BitXor => "`^`",
            Self::ShiftLeft => "`<<`",
            Self::ShiftRight => "`>>`",
            Self::InPlace => "in-place assignment",
            Self::Accessor => "accessor",
            Self::Literal => "literal",
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::Region => "#region",
            Self::EndRegion => "#endregion",
            Self::Macro => "#macro",
            Self::Newline => "newline",
            Self::Eof => "end of input",
        }
    }

    /// Tokens a parser skips without changing meaning.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::Region | Self::EndRegion | Self::Newline
        )
    }

    /// Operators that have an in-place `op=` form.
    #[inline]
    pub const fn has_in_place_form(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Mul
                | Self::Div
                | Self::Mod
                | Self::BitAnd
                | Self::BitOr
                | Self::BitXor
                | Self::ShiftLeft
                | Self::ShiftRight
                | Self::Nullish
        )
    }
}
