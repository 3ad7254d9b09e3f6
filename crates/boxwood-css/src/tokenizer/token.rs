//! CSS token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Property parsers consume these tokens left to right. Numeric tokens carry
//! their value already converted from the source text; the conversion uses
//! `str::parse`, which does not depend on the process locale.

use core::fmt;

/// A CSS token, as consumed by the property parsers.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`" (name without the opening parenthesis)
    Function(String),

    /// "`<at-keyword-token>`" (name without the `@`)
    AtKeyword(String),

    /// "`<hash-token>`" (value without the `#`)
    Hash(String),

    /// "`<string-token>`"
    String(String),

    /// "`<delim-token>`"
    /// "has a value composed of a single code point"
    Delim(char),

    /// "`<number-token>`"
    Number(f32),

    /// "`<percentage-token>`"
    /// The value is the number before the `%` sign.
    Percentage(f32),

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// "a numeric value"
        value: f32,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    Whitespace,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of input.
    EOF,
}

impl CSSToken {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new dimension token.
    #[must_use]
    pub fn dimension(value: f32, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// Create a new percentage token.
    #[must_use]
    pub const fn percentage(value: f32) -> Self {
        Self::Percentage(value)
    }

    /// Create a new delim token.
    #[must_use]
    pub const fn delim(c: char) -> Self {
        Self::Delim(c)
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true if this is an ident matching `keyword` (ASCII case-insensitive).
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        matches!(self, Self::Ident(v) if v.eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            Self::Hash(v) => write!(f, "<hash:#{v}>"),
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Number(value) => write!(f, "<number:{value}>"),
            Self::Percentage(value) => write!(f, "<percentage:{value}%>"),
            Self::Dimension { value, unit } => write!(f, "<dimension:{value}{unit}>"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::Colon => write!(f, "<colon>"),
            Self::Semicolon => write!(f, "<semicolon>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LeftBracket => write!(f, "<[>"),
            Self::RightBracket => write!(f, "<]>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::LeftBrace => write!(f, "<{{>"),
            Self::RightBrace => write!(f, "<}}>"),
            Self::EOF => write!(f, "<EOF>"),
        }
    }
}
