//! Nested records owned by macro and template tokens.

use crate::{Position, Span};

use super::Token;

/// A `#macro` directive and its pre-tokenized body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroRecord {
    pub name: String,
    /// The `config` in `#macro config:name`.
    pub configuration: Option<String>,
    pub body: Vec<Token>,
    /// Directive text from the first header identifier through the end of
    /// the body, excluding the terminating newline.
    pub lexeme: String,
    pub name_begin: Position,
    pub name_end: Position,
}

impl MacroRecord {
    /// Length of `#macro ` as it precedes the header in canonical form.
    pub const KEYWORD_LENGTH: u32 = 7;

    #[inline]
    pub fn has_configuration(&self) -> bool {
        self.configuration.is_some()
    }

    #[inline]
    pub fn name_span(&self) -> Span {
        Span::new(self.name_begin.offset, self.name_end.offset)
    }
}

/// Source extent of one `{...}` interpolation section, braces included.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionSpan {
    /// Offsets into the whole source.
    pub absolute: Span,
    /// Offsets into the template's `lexeme`.
    pub relative: Span,
}

impl SectionSpan {
    /// Absolute span of the expression between the braces.
    #[inline]
    pub fn expression(&self) -> Span {
        Span::new(self.absolute.start + 1, self.absolute.end - 1)
    }
}

/// A `$"..."` template string.
///
/// Invariant: `sections` and `section_tokens` have the same length and
/// correspond index for index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateRecord {
    /// Body between the quotes, undecoded.
    pub lexeme: String,
    /// `lexeme` with section `i` replaced by the decimal string `i`, then
    /// escape-decoded.
    pub decoded: String,
    pub sections: Vec<SectionSpan>,
    pub section_tokens: Vec<Vec<Token>>,
}

impl TemplateRecord {
    pub fn sections(&self) -> impl Iterator<Item = (SectionSpan, &[Token])> + '_ {
        self.sections
            .iter()
            .copied()
            .zip(self.section_tokens.iter().map(Vec::as_slice))
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
