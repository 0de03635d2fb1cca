//! Token kinds for Coyote.

use std::fmt;

use super::literal::Literal;
use super::records::MacroRecord;
use super::tag::TokenTag;

/// Token kinds for Coyote.
///
/// Each variant carries exactly the payload its kind needs. Plain
/// punctuation and operators carry nothing.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Grouping
    /// `{` or `begin`
    LCurly(Spelling),
    /// `}` or `end`
    RCurly(Spelling),
    LBracket,
    RBracket,
    LParen,
    RParen,

    // Arithmetic
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    /// `div`
    IntDiv,
    /// `mod`
    IntMod,
    Incr,
    Decr,

    // Punctuation
    Equals,
    Dot,
    Comma,
    Semicolon,
    Colon,
    Question,

    // Comparison
    Equality,
    /// `!=` or `<>`
    Inequality,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,

    // Logical
    LogicNot(Spelling),
    LogicAnd(Spelling),
    LogicOr(Spelling),
    LogicXor(Spelling),
    /// `??`
    Nullish,

    // Bitwise
    BitNot,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,

    /// Operator immediately followed by `=`, e.g. `+=`.
    InPlace(InPlaceOp),
    /// `[` followed by a typed indexing marker.
    Accessor(AccessorKind),

    Literal(Literal),
    Identifier(String),
    Keyword(Keyword),

    Comment(Comment),
    /// `#region` with the rest of the line.
    Region(String),
    /// `#endregion` with the rest of the line.
    EndRegion(String),
    Macro(Box<MacroRecord>),

    Newline,
    /// Synthetic end-of-input marker appended by `scan_to_end`.
    Eof,
}

impl TokenKind {
    /// Payload-free discriminant.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::LCurly(_) => TokenTag::LCurly,
            TokenKind::RCurly(_) => TokenTag::RCurly,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Mul => TokenTag::Mul,
            TokenKind::Div => TokenTag::Div,
            TokenKind::Mod => TokenTag::Mod,
            TokenKind::IntDiv => TokenTag::IntDiv,
            TokenKind::IntMod => TokenTag::IntMod,
            TokenKind::Incr => TokenTag::Incr,
            TokenKind::Decr => TokenTag::Decr,
            TokenKind::Equals => TokenTag::Equals,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Question => TokenTag::Question,
            TokenKind::Equality => TokenTag::Equality,
            TokenKind::Inequality => TokenTag::Inequality,
            TokenKind::LessThan => TokenTag::LessThan,
            TokenKind::LessEqual => TokenTag::LessEqual,
            TokenKind::GreaterThan => TokenTag::GreaterThan,
            TokenKind::GreaterEqual => TokenTag::GreaterEqual,
            TokenKind::LogicNot(_) => TokenTag::LogicNot,
            TokenKind::LogicAnd(_) => TokenTag::LogicAnd,
            TokenKind::LogicOr(_) => TokenTag::LogicOr,
            TokenKind::LogicXor(_) => TokenTag::LogicXor,
            TokenKind::Nullish => TokenTag::Nullish,
            TokenKind::BitNot => TokenTag::BitNot,
            TokenKind::BitAnd => TokenTag::BitAnd,
            TokenKind::BitOr => TokenTag::BitOr,
            TokenKind::BitXor => TokenTag::BitXor,
            TokenKind::ShiftLeft => TokenTag::ShiftLeft,
            TokenKind::ShiftRight => TokenTag::ShiftRight,
            TokenKind::InPlace(_) => TokenTag::InPlace,
            TokenKind::Accessor(_) => TokenTag::Accessor,
            TokenKind::Literal(_) => TokenTag::Literal,
            TokenKind::Identifier(_) => TokenTag::Identifier,
            TokenKind::Keyword(_) => TokenTag::Keyword,
            TokenKind::Comment(_) => TokenTag::Comment,
            TokenKind::Region(_) => TokenTag::Region,
            TokenKind::EndRegion(_) => TokenTag::EndRegion,
            TokenKind::Macro(_) => TokenTag::Macro,
            TokenKind::Newline => TokenTag::Newline,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            TokenKind::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_macro(&self) -> Option<&MacroRecord> {
        match self {
            TokenKind::Macro(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LCurly(Spelling::Word) => write!(f, "LCurly(begin)"),
            TokenKind::RCurly(Spelling::Word) => write!(f, "RCurly(end)"),
            TokenKind::LogicNot(s)
            | TokenKind::LogicAnd(s)
            | TokenKind::LogicOr(s)
            | TokenKind::LogicXor(s)
                if *s == Spelling::Word =>
            {
                write!(f, "{}(word)", self.tag().name())
            }
            TokenKind::InPlace(op) => write!(f, "InPlace({}=)", op.symbol()),
            TokenKind::Accessor(kind) => write!(f, "Accessor([{})", kind.marker()),
            TokenKind::Literal(lit) => write!(f, "Literal({lit:?})"),
            TokenKind::Identifier(name) => write!(f, "Identifier({name:?})"),
            TokenKind::Keyword(kw) => write!(f, "Keyword({})", kw.as_str()),
            TokenKind::Comment(c) => write!(f, "Comment({:?}, {:?})", c.kind, c.text),
            TokenKind::Region(text) => write!(f, "Region({text:?})"),
            TokenKind::EndRegion(text) => write!(f, "EndRegion({text:?})"),
            TokenKind::Macro(record) => write!(f, "Macro({:?})", record.name),
            _ => f.write_str(self.tag().name()),
        }
    }
}

/// Whether a token was written with its symbol or its word form.
///
/// `{` and `begin` lex to the same kind; the spelling survives for tools
/// that echo the source back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spelling {
    Symbol,
    Word,
}

/// Base operator of an in-place assignment such as `+=` or `??=`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InPlaceOp {
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    Nullish,
}

impl InPlaceOp {
    /// Tag of the operator this assignment applies.
    pub const fn base(self) -> TokenTag {
        match self {
            InPlaceOp::Plus => TokenTag::Plus,
            InPlaceOp::Minus => TokenTag::Minus,
            InPlaceOp::Mul => TokenTag::Mul,
            InPlaceOp::Div => TokenTag::Div,
            InPlaceOp::Mod => TokenTag::Mod,
            InPlaceOp::BitAnd => TokenTag::BitAnd,
            InPlaceOp::BitOr => TokenTag::BitOr,
            InPlaceOp::BitXor => TokenTag::BitXor,
            InPlaceOp::ShiftLeft => TokenTag::ShiftLeft,
            InPlaceOp::ShiftRight => TokenTag::ShiftRight,
            InPlaceOp::Nullish => TokenTag::Nullish,
        }
    }

    /// Source spelling without the trailing `=`.
    pub const fn symbol(self) -> &'static str {
        match self {
            InPlaceOp::Plus => "+",
            InPlaceOp::Minus => "-",
            InPlaceOp::Mul => "*",
            InPlaceOp::Div => "/",
            InPlaceOp::Mod => "%",
            InPlaceOp::BitAnd => "&",
            InPlaceOp::BitOr => "|",
            InPlaceOp::BitXor => "^",
            InPlaceOp::ShiftLeft => "<<",
            InPlaceOp::ShiftRight => ">>",
            InPlaceOp::Nullish => "??",
        }
    }
}

/// Typed indexing selected by the marker after `[`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessorKind {
    /// `[|`
    List,
    /// `[?`
    Map,
    /// `[#`
    Grid,
    /// `[@`
    Array,
    /// `[$`
    Struct,
    /// `[B:`
    U8,
    /// `[b:`
    S8,
    /// `[X:`
    U16,
    /// `[x:`
    S16,
    /// `[I:`
    U32,
    /// `[i:`
    S32,
    /// `[f:`
    F32,
    /// `[d:`
    F64,
}

impl AccessorKind {
    /// Every accessor, two-character buffer markers first so the tokenizer
    /// can try them in order with a longest-match lookup.
    pub const ALL: [AccessorKind; 13] = [
        AccessorKind::U8,
        AccessorKind::S8,
        AccessorKind::U16,
        AccessorKind::S16,
        AccessorKind::U32,
        AccessorKind::S32,
        AccessorKind::F32,
        AccessorKind::F64,
        AccessorKind::List,
        AccessorKind::Map,
        AccessorKind::Grid,
        AccessorKind::Array,
        AccessorKind::Struct,
    ];

    /// Source spelling of the marker, without the `[`.
    pub const fn marker(self) -> &'static str {
        match self {
            AccessorKind::List => "|",
            AccessorKind::Map => "?",
            AccessorKind::Grid => "#",
            AccessorKind::Array => "@",
            AccessorKind::Struct => "$",
            AccessorKind::U8 => "B:",
            AccessorKind::S8 => "b:",
            AccessorKind::U16 => "X:",
            AccessorKind::S16 => "x:",
            AccessorKind::U32 => "I:",
            AccessorKind::S32 => "i:",
            AccessorKind::F32 => "f:",
            AccessorKind::F64 => "d:",
        }
    }
}

/// Reserved words that are not operators or named literals.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    If,
    Then,
    Else,
    Switch,
    Case,
    Default,
    Do,
    For,
    With,
    While,
    Until,
    Repeat,
    Break,
    Continue,
    Exit,
    Return,
    Var,
    GlobalVar,
    Static,
    Enum,
    Function,
    Constructor,
    Delete,
    Try,
    Catch,
    Finally,
    Throw,
}

impl Keyword {
    pub const ALL: [Keyword; 27] = [
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::Switch,
        Keyword::Case,
        Keyword::Default,
        Keyword::Do,
        Keyword::For,
        Keyword::With,
        Keyword::While,
        Keyword::Until,
        Keyword::Repeat,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Exit,
        Keyword::Return,
        Keyword::Var,
        Keyword::GlobalVar,
        Keyword::Static,
        Keyword::Enum,
        Keyword::Function,
        Keyword::Constructor,
        Keyword::Delete,
        Keyword::Try,
        Keyword::Catch,
        Keyword::Finally,
        Keyword::Throw,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::Default => "default",
            Keyword::Do => "do",
            Keyword::For => "for",
            Keyword::With => "with",
            Keyword::While => "while",
            Keyword::Until => "until",
            Keyword::Repeat => "repeat",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Exit => "exit",
            Keyword::Return => "return",
            Keyword::Var => "var",
            Keyword::GlobalVar => "globalvar",
            Keyword::Static => "static",
            Keyword::Enum => "enum",
            Keyword::Function => "function",
            Keyword::Constructor => "constructor",
            Keyword::Delete => "delete",
            Keyword::Try => "try",
            Keyword::Catch => "catch",
            Keyword::Finally => "finally",
            Keyword::Throw => "throw",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// `// ...` up to the end of the line.
    Line,
    /// `/* ... */`, possibly nested.
    Block,
}

/// Comment text without its delimiters.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    pub fn new(kind: CommentKind, text: impl Into<String>) -> Self {
        Comment {
            kind,
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }
}
