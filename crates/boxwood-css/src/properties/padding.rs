//! [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)

use super::PropertyParser;
use super::cursor::{
    LengthOrPercentage, TokenCursor, parse_box_shorthand, parse_longhand,
    parse_signed_length_or_percentage, side_for_name,
};
use crate::tokenizer::CSSToken;
use crate::values::{BoxSide, PaddingWidth, PropertyValue};

static PADDING_NAMES: [&str; 4] = [
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
];

/// "`<padding-width>` = `<length>` | `<percentage>`"
/// "Unlike margin properties, values for padding values cannot be negative."
fn padding_width(cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<PaddingWidth> {
    match parse_signed_length_or_percentage(cursor, token)? {
        value if value.is_negative() => None,
        LengthOrPercentage::Length(length) => Some(PaddingWidth::Length(length)),
        LengthOrPercentage::Percentage(percentage) => Some(PaddingWidth::Percentage(percentage)),
    }
}

/// Parser for `padding-top`, `padding-right`, `padding-bottom` and
/// `padding-left`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddingLtrbParser;

impl PropertyParser for PaddingLtrbParser {
    fn names(&self) -> &'static [&'static str] {
        &PADDING_NAMES
    }

    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        let Some(side) = side_for_name(name, &PADDING_NAMES) else {
            return;
        };
        if let Some(value) = parse_longhand(tokens, PaddingWidth::Inherit, padding_width) {
            out.push(PropertyValue::Padding { side, value });
        }
    }
}

/// Parser for the `padding` shorthand.
///
/// "Value: `<padding-width>`{1,4} | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddingShorthandParser;

impl PropertyParser for PaddingShorthandParser {
    fn names(&self) -> &'static [&'static str] {
        &["padding"]
    }

    fn parse(&self, _name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        if let Some(values) = parse_box_shorthand(tokens, PaddingWidth::Inherit, padding_width) {
            out.extend(
                BoxSide::ALL
                    .into_iter()
                    .zip(values)
                    .map(|(side, value)| PropertyValue::Padding { side, value }),
            );
        }
    }
}
