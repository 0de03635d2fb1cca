//! Literal payloads.

use std::fmt;

use super::records::TemplateRecord;

/// Value of a literal token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Number(NumberLiteral),
    /// Escape-decoded (or raw) string contents.
    String(String),
    /// `$"..."` with its interpolation sections.
    Template(Box<TemplateRecord>),
    Boolean(bool),
    Undefined,
    /// `self`
    SelfInstance,
    Other,
    All,
    Noone,
    Global,
}

impl Literal {
    #[inline]
    pub fn int(value: u64, radix: NumberRadix) -> Self {
        Literal::Number(NumberLiteral::int(value, radix))
    }

    #[inline]
    pub fn float(value: f64) -> Self {
        Literal::Number(NumberLiteral::float(value))
    }

    pub fn as_number(&self) -> Option<NumberLiteral> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_template(&self) -> Option<&TemplateRecord> {
        match self {
            Literal::Template(t) => Some(t),
            _ => None,
        }
    }
}

/// A numeric literal together with the notation it was written in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberLiteral {
    pub value: NumberValue,
    pub radix: NumberRadix,
}

impl NumberLiteral {
    #[inline]
    pub const fn int(value: u64, radix: NumberRadix) -> Self {
        NumberLiteral {
            value: NumberValue::Int(value),
            radix,
        }
    }

    #[inline]
    pub const fn float(value: f64) -> Self {
        NumberLiteral {
            value: NumberValue::Float(value),
            radix: NumberRadix::Float,
        }
    }
}

/// Renders the literal back in its source notation.
///
/// Colours print the packed (blue-green-red) value, so `#FF0080` in source
/// displays as `#8000FF`.
impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.radix, self.value) {
            (_, NumberValue::Float(v)) => write!(f, "{v:.4}"),
            (NumberRadix::Hex, NumberValue::Int(v)) => write!(f, "0x{v:X}"),
            (NumberRadix::Bin, NumberValue::Int(v)) => write!(f, "0b{v:b}"),
            (NumberRadix::Colour, NumberValue::Int(v)) => write!(f, "#{v:06X}"),
            (NumberRadix::Int | NumberRadix::Float, NumberValue::Int(v)) => write!(f, "{v}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberValue {
    Int(u64),
    Float(f64),
}

impl NumberValue {
    /// The value widened to a float, as the runtime sees every number.
    #[allow(
        clippy::cast_precision_loss,
        reason = "the runtime stores all numbers as doubles"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            NumberValue::Int(v) => v as f64,
            NumberValue::Float(v) => v,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberRadix {
    Int,
    Float,
    Hex,
    Bin,
    Colour,
}
