//! Token reading helpers shared by the property parsers.

use boxwood_common::warning::warn_once;

use crate::tokenizer::CSSToken;
use crate::values::{BoxSide, Length, LengthUnit};

/// Forward-only read position over a declaration's value tokens.
///
/// Whitespace is skipped transparently. Parsers never look behind.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [CSSToken],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    /// Start reading at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [CSSToken]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Return the next non-whitespace token and advance past it.
    pub fn next_token(&mut self) -> Option<&'a CSSToken> {
        while let Some(token) = self.tokens.get(self.position) {
            self.position += 1;
            match token {
                CSSToken::Whitespace => {}
                CSSToken::EOF => return None,
                token => return Some(token),
            }
        }
        None
    }

    /// Returns true when nothing but whitespace is left.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.tokens
            .get(self.position..)
            .unwrap_or_default()
            .iter()
            .all(|t| t.is_whitespace() || t.is_eof())
    }
}

/// A `<length>` or a `<percentage>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthOrPercentage {
    /// A length.
    Length(Length),
    /// A percentage.
    Percentage(f32),
}

impl LengthOrPercentage {
    /// Flip the sign.
    #[must_use]
    pub fn negated(self) -> Self {
        match self {
            Self::Length(length) => Self::Length(length.negated()),
            Self::Percentage(percentage) => Self::Percentage(-percentage),
        }
    }

    /// Returns true for values below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Length(length) => length.is_negative(),
            Self::Percentage(percentage) => percentage < 0.0,
        }
    }
}

/// Returns true for tokens that can be read as a `<length>`: dimensions and
/// the unitless number `0`.
#[must_use]
pub fn is_length(token: &CSSToken) -> bool {
    match token {
        CSSToken::Dimension { .. } => true,
        CSSToken::Number(value) => *value == 0.0,
        _ => false,
    }
}

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-3/#lengths)
///
/// Read a `<length>` token. Unknown units yield `None`.
#[must_use]
pub fn parse_length(token: &CSSToken) -> Option<Length> {
    match token {
        CSSToken::Dimension { value, unit } if value.is_finite() => {
            if let Ok(unit) = unit.parse::<LengthUnit>() {
                Some(Length::new(*value, unit))
            } else {
                warn_once("CSS", &format!("unsupported unit '{unit}'"));
                None
            }
        }
        // "for zero lengths the unit identifier is optional"
        CSSToken::Number(value) if *value == 0.0 => Some(Length::px(0.0)),
        _ => None,
    }
}

/// Read a `<length>` or `<percentage>` token.
#[must_use]
pub fn parse_length_or_percentage(token: &CSSToken) -> Option<LengthOrPercentage> {
    match token {
        CSSToken::Percentage(value) if value.is_finite() => {
            Some(LengthOrPercentage::Percentage(*value))
        }
        token => parse_length(token).map(LengthOrPercentage::Length),
    }
}

/// Read a `<length>` or `<percentage>` starting at `first`, which may be a
/// `-` delim negating the token after it.
///
/// Only a single leading minus is accepted: `-` followed by an already
/// negative number is rejected.
pub fn parse_signed_length_or_percentage(
    cursor: &mut TokenCursor<'_>,
    first: &CSSToken,
) -> Option<LengthOrPercentage> {
    if *first == CSSToken::Delim('-') {
        let value = parse_length_or_percentage(cursor.next_token()?)?;
        return (!value.is_negative()).then(|| value.negated());
    }
    parse_length_or_percentage(first)
}

/// Returns true if `tokens` hold exactly one ident matching `keyword`.
#[must_use]
pub fn is_single_keyword(tokens: &[CSSToken], keyword: &str) -> bool {
    let mut cursor = TokenCursor::new(tokens);
    cursor.next_token().is_some_and(|t| t.is_ident(keyword)) && cursor.is_at_end()
}

/// Map a property name to the side it names. `names` is in shorthand order
/// (top, right, bottom, left).
#[must_use]
pub fn side_for_name(name: &str, names: &[&str; 4]) -> Option<BoxSide> {
    BoxSide::ALL
        .into_iter()
        .zip(names)
        .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
        .map(|(side, _)| side)
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
#[must_use]
pub fn expand_box_values<T: Copy>(values: &[T]) -> Option<[T; 4]> {
    match *values {
        [all] => Some([all; 4]),
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        [top, right, bottom, left] => Some([top, right, bottom, left]),
        _ => None,
    }
}

/// Parse a longhand: `inherit` alone, or exactly one component read by
/// `component` from the first token.
pub fn parse_longhand<'a, T>(
    tokens: &'a [CSSToken],
    inherit: T,
    component: impl Fn(&mut TokenCursor<'a>, &'a CSSToken) -> Option<T>,
) -> Option<T> {
    if is_single_keyword(tokens, "inherit") {
        return Some(inherit);
    }
    let mut cursor = TokenCursor::new(tokens);
    let first = cursor.next_token()?;
    let value = component(&mut cursor, first)?;
    // Trailing tokens invalidate the whole declaration.
    cursor.is_at_end().then_some(value)
}

/// Parse a four-sided shorthand: `inherit` alone, or one to four components
/// expanded with [`expand_box_values`].
pub fn parse_box_shorthand<'a, T: Copy>(
    tokens: &'a [CSSToken],
    inherit: T,
    component: impl Fn(&mut TokenCursor<'a>, &'a CSSToken) -> Option<T>,
) -> Option<[T; 4]> {
    if is_single_keyword(tokens, "inherit") {
        return Some([inherit; 4]);
    }
    let mut cursor = TokenCursor::new(tokens);
    let mut values = Vec::with_capacity(4);
    while let Some(token) = cursor.next_token() {
        if values.len() == 4 {
            return None;
        }
        values.push(component(&mut cursor, token)?);
    }
    expand_box_values(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_skips_whitespace() {
        let tokens = [
            CSSToken::Whitespace,
            CSSToken::ident("auto"),
            CSSToken::Whitespace,
        ];
        let mut cursor = TokenCursor::new(&tokens);
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.next_token(), Some(&CSSToken::ident("auto")));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.next_token(), None);
    }

    #[test]
    fn test_double_minus_is_rejected() {
        let tokens = [CSSToken::Delim('-'), CSSToken::dimension(-5.0, "px")];
        let mut cursor = TokenCursor::new(&tokens);
        let first = cursor.next_token().unwrap();
        assert_eq!(parse_signed_length_or_percentage(&mut cursor, first), None);
    }

    #[test]
    fn test_expand_box_values() {
        assert_eq!(expand_box_values(&[1]), Some([1, 1, 1, 1]));
        assert_eq!(expand_box_values(&[1, 2]), Some([1, 2, 1, 2]));
        assert_eq!(expand_box_values(&[1, 2, 3]), Some([1, 2, 3, 2]));
        assert_eq!(expand_box_values(&[1, 2, 3, 4]), Some([1, 2, 3, 4]));
        assert_eq!(expand_box_values::<i32>(&[]), None);
    }
}
