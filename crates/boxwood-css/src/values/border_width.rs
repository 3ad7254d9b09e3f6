//! [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
//!
//! "`<border-width>` = thin | medium | thick | `<length>`"

use core::fmt;

use serde::Serialize;

use super::length::Length;
use crate::computed::ResourceCache;

/// Used widths of the border keywords, in pixels.
///
/// "The interpretation of the first three values depends on the user
/// agent. The following relationships must hold, however:
/// 'thin' <='medium' <= 'thick'."
pub const THIN_PX: f32 = 1.0;
/// See [`THIN_PX`].
pub const MEDIUM_PX: f32 = 3.0;
/// See [`THIN_PX`].
pub const THICK_PX: f32 = 5.0;

/// The value of one of the `border-*-width` longhands. Initial: medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BorderWidth {
    /// `thin`
    Thin,
    /// `medium`
    #[default]
    Medium,
    /// `thick`
    Thick,
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
}

impl BorderWidth {
    /// Resolve `inherit`, the width keywords and relative units. The result
    /// is always a pixel length.
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

        *self = match *self {
            Self::Thin => Self::Length(Length::px(THIN_PX)),
            Self::Medium | Self::Inherit => Self::Length(Length::px(MEDIUM_PX)),
            Self::Thick => Self::Length(Length::px(THICK_PX)),
            Self::Length(length) => Self::Length(cache.compute_length(length, em_size, ex_size)),
        };
    }
}

impl fmt::Display for BorderWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thin => f.write_str("thin"),
            Self::Medium => f.write_str("medium"),
            Self::Thick => f.write_str("thick"),
            Self::Inherit => f.write_str("inherit"),
            Self::Length(length) => write!(f, "{length}"),
        }
    }
}
