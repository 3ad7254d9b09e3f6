//! [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
//!
//! "`<margin-width>` = `<length>` | `<percentage>` | auto"

use core::fmt;

use serde::Serialize;

use super::length::Length;
use crate::computed::ResourceCache;

/// The value of one of `margin-top`, `margin-right`, `margin-bottom` or
/// `margin-left`.
///
/// Initial: 0. Percentages refer to the width of the containing block and
/// are kept as percentages until layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MarginWidth {
    /// `auto`, resolved by the layout algorithm.
    Auto,
    /// `inherit`, replaced by the parent's value during computation.
    Inherit,
    /// An explicit length; may be negative.
    Length(Length),
    /// A percentage of the containing block's width; may be negative.
    Percentage(f32),
}

impl Default for MarginWidth {
    fn default() -> Self {
        Self::Length(Length::px(0.0))
    }
}

impl MarginWidth {
    /// Resolve `inherit` and relative units.
    ///
    /// Without a parent, `inherit` falls back to the initial value.
    pub fn compute(
        &mut self,
        parent: Option<&Self>,
        cache: &ResourceCache,
        em_size: f32,
        ex_size: f32,
    ) {
        if *self == Self::Inherit {
            *self = parent.copied().unwrap_or_default();
        }

        if let Self::Length(length) = self {
            *length = cache.compute_length(*length, em_size, ex_size);
        }
    }
}

impl fmt::Display for MarginWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Inherit => f.write_str("inherit"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}%"),
        }
    }
}
