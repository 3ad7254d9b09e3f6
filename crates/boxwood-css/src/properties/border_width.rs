//! [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)

use super::PropertyParser;
use super::cursor::{TokenCursor, parse_box_shorthand, parse_length, parse_longhand, side_for_name};
use crate::tokenizer::CSSToken;
use crate::values::{BorderWidth, BoxSide, PropertyValue};

static BORDER_WIDTH_NAMES: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];

/// "`<border-width>` = thin | medium | thick | `<length>`"
/// "Negative values are not allowed."
fn border_width(_cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<BorderWidth> {
    if let CSSToken::Ident(ident) = token {
        return match ident.to_ascii_lowercase().as_str() {
            "thin" => Some(BorderWidth::Thin),
            "medium" => Some(BorderWidth::Medium),
            "thick" => Some(BorderWidth::Thick),
            _ => None,
        };
    }
    parse_length(token)
        .filter(|length| !length.is_negative())
        .map(BorderWidth::Length)
}

/// Parser for `border-top-width`, `border-right-width`,
/// `border-bottom-width` and `border-left-width`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderWidthLtrbParser;

impl PropertyParser for BorderWidthLtrbParser {
    fn names(&self) -> &'static [&'static str] {
        &BORDER_WIDTH_NAMES
    }

    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        let Some(side) = side_for_name(name, &BORDER_WIDTH_NAMES) else {
            return;
        };
        if let Some(value) = parse_longhand(tokens, BorderWidth::Inherit, border_width) {
            out.push(PropertyValue::BorderWidth { side, value });
        }
    }
}

/// Parser for the `border-width` shorthand.
///
/// "Value: `<border-width>`{1,4} | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderWidthShorthandParser;

impl PropertyParser for BorderWidthShorthandParser {
    fn names(&self) -> &'static [&'static str] {
        &["border-width"]
    }

    fn parse(&self, _name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        if let Some(values) = parse_box_shorthand(tokens, BorderWidth::Inherit, border_width) {
            out.extend(
                BoxSide::ALL
                    .into_iter()
                    .zip(values)
                    .map(|(side, value)| PropertyValue::BorderWidth { side, value }),
            );
        }
    }
}
