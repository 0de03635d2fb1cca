//! Lexer error types.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `position` of the offending character or construct
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` recording what the tokenizer was scanning
//! - HOW: `suggestions` with actionable fixes
//!
//! Every error is fatal. The tokenizer returns the first one it hits.

use coyote_ir::{Position, Span};
use thiserror::Error;

use crate::escape::{EscapeError, EscapeErrorKind};

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub position: Position,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were scanning (construct being lexed at the point of error).
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === String Errors ===
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("newline in string literal")]
    NewlineInString,
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    #[error("unterminated template string")]
    UnterminatedTemplate,
    #[error("newline in template string")]
    NewlineInTemplate,
    /// End of input inside a `{...}` section of a template.
    #[error("unclosed interpolation section")]
    UnclosedInterpolation,
    /// A `"` directly inside a template's interpolation expression.
    #[error("quote inside interpolation section")]
    QuoteInInterpolation,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    // === Escape Errors ===
    #[error("unknown escape sequence `\\{escape_char}`")]
    UnknownEscape { escape_char: char },
    /// Lone `\` at the end of a literal body.
    #[error("empty escape sequence")]
    EmptyEscape,
    #[error("escape `\\{escape}` needs {expected} hex digits, found {found}")]
    NotEnoughEscapeDigits {
        escape: char,
        expected: u8,
        found: u8,
    },
    #[error("escape names invalid code point U+{value:04X}")]
    InvalidCodePoint { value: u32 },

    // === Numeric Errors ===
    #[error("colour literal has {digits} hex digits, expected 6")]
    NotEnoughColourDigits { digits: u32 },
    #[error("colour literal has {digits} hex digits, expected 6")]
    TooManyColourDigits { digits: u32 },
    /// `0x` or `0b` with no digits after it.
    #[error("missing digits after {radix} prefix")]
    MissingDigits { radix: &'static str },
    #[error("integer literal is too large")]
    IntOverflow,

    // === Directive Errors ===
    #[error("unknown directive `#{name}`")]
    UnknownDirective { name: String },
    #[error("`#macro` inside a macro body")]
    NestedMacro,
    #[error("expected macro name")]
    MacroNameExpected,
    #[error("malformed macro identifier starting with `{found}`")]
    MalformedMacroIdentifier { found: char },

    // === Continuator Errors ===
    /// `\` outside a macro body.
    #[error("unexpected line continuator")]
    UnexpectedContinuator,
    /// `\` in a macro body not followed by a newline.
    #[error("line continuator must be followed by a newline")]
    ContinuatorWithoutNewline,

    #[error("source exceeds 4 GiB")]
    SourceTooLarge,
}

/// Lexing context at the point of error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Top-level scanning (not inside any literal or directive).
    #[default]
    TopLevel,
    /// Inside the body of a `#macro`.
    MacroBody { start: u32 },
    /// Inside a `{...}` section of a template string.
    Interpolation { start: u32 },
    /// Inside a quoted string literal.
    InsideString { start: u32 },
    /// Inside a `$"..."` template literal.
    InsideTemplate { start: u32 },
    BlockComment { start: u32 },
    NumberLiteral,
    /// Reading the header of a `#` directive.
    Directive,
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Lower is more likely relevant.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion that deletes `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, String::new())
    }

    /// Create a suggestion with a replacement.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    fn new(position: Position, kind: LexErrorKind, context: LexErrorContext) -> Self {
        Self {
            position,
            kind,
            context,
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn unterminated_string(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::UnterminatedString,
            LexErrorContext::InsideString { start },
        )
        .with_suggestion(LexSuggestion::text("add closing `\"`", 0))
    }

    #[cold]
    pub fn newline_in_string(position: Position, start: u32) -> Self {
        let newline = Span::new(position.offset, position.offset + 1);
        Self::new(
            position,
            LexErrorKind::NewlineInString,
            LexErrorContext::InsideString { start },
        )
        .with_suggestion(LexSuggestion::replace(
            "escape the line break",
            newline,
            "\\n",
        ))
        .with_suggestion(LexSuggestion::text(
            "use a raw string `@\"...\"` for multi-line text",
            1,
        ))
    }

    #[cold]
    pub fn unterminated_raw_string(position: Position, start: u32, quote: char) -> Self {
        Self::new(
            position,
            LexErrorKind::UnterminatedRawString,
            LexErrorContext::InsideString { start },
        )
        .with_suggestion(LexSuggestion::text(format!("add closing `{quote}`"), 0))
    }

    #[cold]
    pub fn unterminated_template(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::UnterminatedTemplate,
            LexErrorContext::InsideTemplate { start },
        )
        .with_suggestion(LexSuggestion::text("add closing `\"`", 0))
    }

    #[cold]
    pub fn newline_in_template(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::NewlineInTemplate,
            LexErrorContext::InsideTemplate { start },
        )
    }

    #[cold]
    pub fn unclosed_interpolation(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::UnclosedInterpolation,
            LexErrorContext::Interpolation { start },
        )
        .with_suggestion(LexSuggestion::text("add `}` to close the section", 0))
    }

    #[cold]
    pub fn quote_in_interpolation(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::QuoteInInterpolation,
            LexErrorContext::Interpolation { start },
        )
        .with_suggestion(LexSuggestion::text(
            "move the string into a variable outside the template",
            1,
        ))
    }

    #[cold]
    pub fn unterminated_block_comment(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::UnterminatedBlockComment,
            LexErrorContext::BlockComment { start },
        )
        .with_suggestion(LexSuggestion::text("add closing `*/`", 0))
    }

    /// Position an escape decoding failure reported for a literal.
    #[cold]
    pub fn escape(position: Position, err: &EscapeError, context: LexErrorContext) -> Self {
        let kind = match err.kind {
            EscapeErrorKind::UnknownEscape { escape_char } => {
                LexErrorKind::UnknownEscape { escape_char }
            }
            EscapeErrorKind::EmptyEscape => LexErrorKind::EmptyEscape,
            EscapeErrorKind::NotEnoughDigits {
                escape,
                expected,
                found,
            } => LexErrorKind::NotEnoughEscapeDigits {
                escape,
                expected,
                found,
            },
            EscapeErrorKind::InvalidCodePoint { value } => LexErrorKind::InvalidCodePoint { value },
        };
        let err = Self::new(position, kind, context);
        match err.kind {
            LexErrorKind::UnknownEscape { .. } => err.with_suggestion(LexSuggestion::text(
                r#"valid escapes are: \\, \", \', \n, \r, \t, \b, \f, \v, \a, \0-\7, \xHH, \uHHHH"#,
                1,
            )),
            LexErrorKind::EmptyEscape => {
                err.with_suggestion(LexSuggestion::text("use `\\\\` for a literal backslash", 0))
            }
            _ => err,
        }
    }

    #[cold]
    pub fn not_enough_colour_digits(position: Position, digits: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::NotEnoughColourDigits { digits },
            LexErrorContext::NumberLiteral,
        )
        .with_suggestion(LexSuggestion::text("write colours as `#RRGGBB`", 0))
    }

    #[cold]
    pub fn too_many_colour_digits(position: Position, digits: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::TooManyColourDigits { digits },
            LexErrorContext::NumberLiteral,
        )
        .with_suggestion(LexSuggestion::text("write colours as `#RRGGBB`", 0))
    }

    #[cold]
    pub fn missing_digits(position: Position, radix: &'static str) -> Self {
        Self::new(
            position,
            LexErrorKind::MissingDigits { radix },
            LexErrorContext::NumberLiteral,
        )
    }

    #[cold]
    pub fn int_overflow(position: Position) -> Self {
        Self::new(
            position,
            LexErrorKind::IntOverflow,
            LexErrorContext::NumberLiteral,
        )
        .with_suggestion(LexSuggestion::text(
            "use a smaller value (maximum is 18446744073709551615)",
            1,
        ))
    }

    #[cold]
    pub fn unknown_directive(position: Position, name: &str) -> Self {
        Self::new(
            position,
            LexErrorKind::UnknownDirective {
                name: name.to_owned(),
            },
            LexErrorContext::Directive,
        )
        .with_suggestion(LexSuggestion::text(
            "known directives are `#macro`, `#region` and `#endregion`",
            1,
        ))
    }

    #[cold]
    pub fn nested_macro(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::NestedMacro,
            LexErrorContext::MacroBody { start },
        )
        .with_suggestion(LexSuggestion::text(
            "end the enclosing macro with a newline first",
            0,
        ))
    }

    #[cold]
    pub fn macro_name_expected(position: Position) -> Self {
        Self::new(
            position,
            LexErrorKind::MacroNameExpected,
            LexErrorContext::Directive,
        )
    }

    #[cold]
    pub fn malformed_macro_identifier(position: Position, found: char) -> Self {
        Self::new(
            position,
            LexErrorKind::MalformedMacroIdentifier { found },
            LexErrorContext::Directive,
        )
        .with_suggestion(LexSuggestion::text(
            "macro names start with a letter or `_`",
            0,
        ))
    }

    #[cold]
    pub fn unexpected_continuator(position: Position) -> Self {
        let span = Span::new(position.offset, position.offset + 1);
        Self::new(
            position,
            LexErrorKind::UnexpectedContinuator,
            LexErrorContext::TopLevel,
        )
        .with_suggestion(LexSuggestion::removal("remove the backslash", span))
    }

    #[cold]
    pub fn continuator_without_newline(position: Position, start: u32) -> Self {
        Self::new(
            position,
            LexErrorKind::ContinuatorWithoutNewline,
            LexErrorContext::MacroBody { start },
        )
    }

    #[cold]
    pub fn source_too_large() -> Self {
        Self::new(
            Position::START,
            LexErrorKind::SourceTooLarge,
            LexErrorContext::TopLevel,
        )
    }

    /// Add a context to this error.
    #[must_use]
    pub fn with_context(mut self, ctx: LexErrorContext) -> Self {
        self.context = ctx;
        self
    }

    /// Add a suggestion to this error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}
