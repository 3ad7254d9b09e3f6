//! [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)

use super::PropertyParser;
use super::cursor::{
    LengthOrPercentage, TokenCursor, parse_box_shorthand, parse_longhand,
    parse_signed_length_or_percentage, side_for_name,
};
use crate::tokenizer::CSSToken;
use crate::values::{BoxSide, MarginWidth, PropertyValue};

static MARGIN_NAMES: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];

/// "`<margin-width>` = `<length>` | `<percentage>` | auto"
///
/// Negative values are allowed, either folded into the numeric token
/// (`-5px`) or as a `-` delim followed by the number.
fn margin_width(cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<MarginWidth> {
    if token.is_ident("auto") {
        return Some(MarginWidth::Auto);
    }
    Some(match parse_signed_length_or_percentage(cursor, token)? {
        LengthOrPercentage::Length(length) => MarginWidth::Length(length),
        LengthOrPercentage::Percentage(percentage) => MarginWidth::Percentage(percentage),
    })
}

/// Parser for `margin-top`, `margin-right`, `margin-bottom` and `margin-left`.
///
/// "Value: `<margin-width>` | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginLtrbParser;

impl PropertyParser for MarginLtrbParser {
    fn names(&self) -> &'static [&'static str] {
        &MARGIN_NAMES
    }

    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        let Some(side) = side_for_name(name, &MARGIN_NAMES) else {
            return;
        };
        if let Some(value) = parse_longhand(tokens, MarginWidth::Inherit, margin_width) {
            out.push(PropertyValue::Margin { side, value });
        }
    }
}

/// Parser for the `margin` shorthand.
///
/// "Value: `<margin-width>`{1,4} | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginShorthandParser;

impl PropertyParser for MarginShorthandParser {
    fn names(&self) -> &'static [&'static str] {
        &["margin"]
    }

    fn parse(&self, _name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        if let Some(values) = parse_box_shorthand(tokens, MarginWidth::Inherit, margin_width) {
            out.extend(
                BoxSide::ALL
                    .into_iter()
                    .zip(values)
                    .map(|(side, value)| PropertyValue::Margin { side, value }),
            );
        }
    }
}
