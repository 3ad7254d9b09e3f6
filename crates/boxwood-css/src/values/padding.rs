//! [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
//!
//! "`<padding-width>` = `<length>` | `<percentage>`"
//! "Unlike margin properties, values for padding values cannot be negative."

use core::fmt;

use serde::Serialize;

use super::length::Length;
use crate::computed::ResourceCache;

/// The value of one of the `padding-*` longhands. Initial: 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PaddingWidth {
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block's width.
    Percentage(f32),
}

impl Default for PaddingWidth {
    fn default() -> Self {
        Self::Length(Length::px(0.0))
    }
}

impl PaddingWidth {
    /// Resolve `inherit` and relative units.
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

impl fmt::Display for PaddingWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}%"),
        }
    }
}
