//! Parsers for the sizing properties
//!
//! - [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
//! - [§ 10.4 'min-width' and 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
//! - [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
//! - [§ 10.7 'min-height' and 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
//!
//! "Negative values for 'width' are illegal." The same holds for the other
//! sizing properties.

use super::PropertyParser;
use super::cursor::{
    LengthOrPercentage, TokenCursor, parse_longhand, parse_signed_length_or_percentage,
};
use crate::tokenizer::CSSToken;
use crate::values::{Axis, MaxSize, MinSize, PropertyValue, Size};

fn non_negative(cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<LengthOrPercentage> {
    parse_signed_length_or_percentage(cursor, token).filter(|value| !value.is_negative())
}

fn axis_for_name(name: &str, horizontal: &str, vertical: &str) -> Option<Axis> {
    if name.eq_ignore_ascii_case(horizontal) {
        Some(Axis::Horizontal)
    } else if name.eq_ignore_ascii_case(vertical) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// "`<length>` | `<percentage>` | auto"
fn size(cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<Size> {
    if token.is_ident("auto") {
        return Some(Size::Auto);
    }
    Some(match non_negative(cursor, token)? {
        LengthOrPercentage::Length(length) => Size::Length(length),
        LengthOrPercentage::Percentage(percentage) => Size::Percentage(percentage),
    })
}

/// "`<length>` | `<percentage>`"
fn min_size(cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<MinSize> {
    Some(match non_negative(cursor, token)? {
        LengthOrPercentage::Length(length) => MinSize::Length(length),
        LengthOrPercentage::Percentage(percentage) => MinSize::Percentage(percentage),
    })
}

/// "`<length>` | `<percentage>` | none"
fn max_size(cursor: &mut TokenCursor<'_>, token: &CSSToken) -> Option<MaxSize> {
    if token.is_ident("none") {
        return Some(MaxSize::None);
    }
    Some(match non_negative(cursor, token)? {
        LengthOrPercentage::Length(length) => MaxSize::Length(length),
        LengthOrPercentage::Percentage(percentage) => MaxSize::Percentage(percentage),
    })
}

/// Parser for `width` and `height`.
///
/// "Value: `<length>` | `<percentage>` | auto | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeParser;

impl PropertyParser for SizeParser {
    fn names(&self) -> &'static [&'static str] {
        &["width", "height"]
    }

    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        let Some(axis) = axis_for_name(name, "width", "height") else {
            return;
        };
        if let Some(value) = parse_longhand(tokens, Size::Inherit, size) {
            out.push(match axis {
                Axis::Horizontal => PropertyValue::Width(value),
                Axis::Vertical => PropertyValue::Height(value),
            });
        }
    }
}

/// Parser for `min-width` and `min-height`.
///
/// "Value: `<length>` | `<percentage>` | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSizeParser;

impl PropertyParser for MinSizeParser {
    fn names(&self) -> &'static [&'static str] {
        &["min-width", "min-height"]
    }

    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        let Some(axis) = axis_for_name(name, "min-width", "min-height") else {
            return;
        };
        if let Some(value) = parse_longhand(tokens, MinSize::Inherit, min_size) {
            out.push(PropertyValue::MinSize { axis, value });
        }
    }
}

/// Parser for `max-width` and `max-height`.
///
/// "Value: `<length>` | `<percentage>` | none | inherit"
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxSizeParser;

impl PropertyParser for MaxSizeParser {
    fn names(&self) -> &'static [&'static str] {
        &["max-width", "max-height"]
    }

    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>) {
        let Some(axis) = axis_for_name(name, "max-width", "max-height") else {
            return;
        };
        if let Some(value) = parse_longhand(tokens, MaxSize::Inherit, max_size) {
            out.push(PropertyValue::MaxSize { axis, value });
        }
    }
}
