//! Box dimensions
//!
//! - [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
//! - [§ 10.4 'min-width' and 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
//! - [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
//! - [§ 10.7 'min-height' and 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)

use core::fmt;

use serde::Serialize;

use super::length::Length;
use crate::computed::ResourceCache;

/// The value of `width` or `height`.
///
/// "Value: `<length>` | `<percentage>` | auto | inherit"
/// Initial: auto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Size {
    /// `auto`
    #[default]
    Auto,
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block's dimension.
    Percentage(f32),
}

impl Size {
    /// Resolve `inherit`, percentages against an undetermined containing
    /// block, and relative units.
    ///
    /// [§ 10.5](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    /// "If the height of the containing block is not specified explicitly
    /// (i.e., it depends on content height), and this element is not
    /// absolutely positioned, the value computes to 'auto'."
    pub fn compute(
        &mut self,
        parent: Option<&Self>,
        cache: &ResourceCache,
        em_size: f32,
        ex_size: f32,
        is_containing_block_size_auto: bool,
    ) {
        if *self == Self::Inherit {
            // The root has nothing to inherit from.
            *self = parent.copied().unwrap_or(Self::Auto);
        }

        if matches!(self, Self::Percentage(_)) && is_containing_block_size_auto {
            *self = Self::Auto;
        }

        if let Self::Length(length) = self {
            *length = cache.compute_length(*length, em_size, ex_size);
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Inherit => f.write_str("inherit"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}%"),
        }
    }
}

/// The value of `min-width` or `min-height`.
///
/// "Value: `<length>` | `<percentage>` | inherit"
/// Initial: 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MinSize {
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block's dimension.
    Percentage(f32),
}

impl Default for MinSize {
    fn default() -> Self {
        Self::Length(Length::px(0.0))
    }
}

impl MinSize {
    /// Resolve `inherit`, unusable percentages and relative units.
    ///
    /// [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    /// "If the height of the containing block is not specified explicitly
    /// ... the percentage value is treated as '0' (for 'min-height')."
    pub fn compute(
        &mut self,
        parent: Option<&Self>,
        cache: &ResourceCache,
        em_size: f32,
        ex_size: f32,
        is_containing_block_size_auto: bool,
    ) {
        if *self == Self::Inherit {
            *self = parent.copied().unwrap_or_default();
        }

        if matches!(self, Self::Percentage(_)) && is_containing_block_size_auto {
            *self = Self::default();
        }

        if let Self::Length(length) = self {
            *length = cache.compute_length(*length, em_size, ex_size);
        }
    }
}

impl fmt::Display for MinSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}%"),
        }
    }
}

/// The value of `max-width` or `max-height`.
///
/// "Value: `<length>` | `<percentage>` | none | inherit"
/// Initial: none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MaxSize {
    /// `none`: no limit.
    #[default]
    None,
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block's dimension.
    Percentage(f32),
}

impl MaxSize {
    /// Resolve `inherit`, unusable percentages and relative units.
    ///
    /// [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    /// "... the percentage value is treated as ... 'none' (for 'max-height')."
    pub fn compute(
        &mut self,
        parent: Option<&Self>,
        cache: &ResourceCache,
        em_size: f32,
        ex_size: f32,
        is_containing_block_size_auto: bool,
    ) {
        if *self == Self::Inherit {
            *self = parent.copied().unwrap_or_default();
        }

        if matches!(self, Self::Percentage(_)) && is_containing_block_size_auto {
            *self = Self::None;
        }

        if let Self::Length(length) = self {
            *length = cache.compute_length(*length, em_size, ex_size);
        }
    }
}

impl fmt::Display for MaxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Inherit => f.write_str("inherit"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}%"),
        }
    }
}
