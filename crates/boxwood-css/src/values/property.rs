//! Parsed property values.
//!
//! [`PropertyValue`] is a closed set: one variant per property family, each
//! wrapping the value type of that family. Sides and axes are carried as
//! tags so that e.g. all four margins share [`MarginWidth`].

use core::fmt;

use serde::Serialize;
use strum_macros::Display;

use super::{BorderWidth, MarginWidth, MaxSize, MinSize, PaddingWidth, Size};
use crate::computed::{ComputeContext, ComputedBox, ComputedValuesUpdater};

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BoxSide {
    /// The top edge.
    Top,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
}

impl BoxSide {
    /// All sides in shorthand order (top, right, bottom, left).
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// The dimension a sizing property constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Width.
    Horizontal,
    /// Height.
    Vertical,
}

/// A parsed declaration value, tagged with the property it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "property", rename_all = "kebab-case")]
pub enum PropertyValue {
    /// `margin-top`, `margin-right`, `margin-bottom`, `margin-left`
    Margin {
        /// Which margin.
        side: BoxSide,
        /// The value.
        value: MarginWidth,
    },
    /// `padding-top`, `padding-right`, `padding-bottom`, `padding-left`
    Padding {
        /// Which padding.
        side: BoxSide,
        /// The value.
        value: PaddingWidth,
    },
    /// `border-top-width`, `border-right-width`, `border-bottom-width`,
    /// `border-left-width`
    BorderWidth {
        /// Which border.
        side: BoxSide,
        /// The value.
        value: BorderWidth,
    },
    /// `width`
    Width(Size),
    /// `height`
    Height(Size),
    /// `min-width`, `min-height`
    MinSize {
        /// Which dimension.
        axis: Axis,
        /// The value.
        value: MinSize,
    },
    /// `max-width`, `max-height`
    MaxSize {
        /// Which dimension.
        axis: Axis,
        /// The value.
        value: MaxSize,
    },
}

impl PropertyValue {
    /// The CSS property name, in lowercase.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Margin { side, .. } => match side {
                BoxSide::Top => "margin-top",
                BoxSide::Right => "margin-right",
                BoxSide::Bottom => "margin-bottom",
                BoxSide::Left => "margin-left",
            },
            Self::Padding { side, .. } => match side {
                BoxSide::Top => "padding-top",
                BoxSide::Right => "padding-right",
                BoxSide::Bottom => "padding-bottom",
                BoxSide::Left => "padding-left",
            },
            Self::BorderWidth { side, .. } => match side {
                BoxSide::Top => "border-top-width",
                BoxSide::Right => "border-right-width",
                BoxSide::Bottom => "border-bottom-width",
                BoxSide::Left => "border-left-width",
            },
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::MinSize { axis, .. } => match axis {
                Axis::Horizontal => "min-width",
                Axis::Vertical => "min-height",
            },
            Self::MaxSize { axis, .. } => match axis {
                Axis::Horizontal => "max-width",
                Axis::Vertical => "max-height",
            },
        }
    }

    /// Returns true if the value is the `inherit` keyword.
    #[must_use]
    pub fn is_inherit(&self) -> bool {
        match self {
            Self::Margin { value, .. } => *value == MarginWidth::Inherit,
            Self::Padding { value, .. } => *value == PaddingWidth::Inherit,
            Self::BorderWidth { value, .. } => *value == BorderWidth::Inherit,
            Self::Width(value) | Self::Height(value) => *value == Size::Inherit,
            Self::MinSize { value, .. } => *value == MinSize::Inherit,
            Self::MaxSize { value, .. } => *value == MaxSize::Inherit,
        }
    }

    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// Turn the specified value into its computed value in place: resolve
    /// `inherit` from `parent`, drop percentages that cannot be resolved, and
    /// convert lengths to pixels.
    pub fn compute(&mut self, parent: Option<&ComputedBox>, ctx: &ComputeContext<'_>) {
        let cache = ctx.cache;
        let (em, ex) = (ctx.em_size, ctx.ex_size);
        let height_auto = ctx.containing_block_height_auto;

        match self {
            Self::Margin { side, value } => {
                value.compute(parent.map(|p| p.margin.get(*side)), cache, em, ex);
            }
            Self::Padding { side, value } => {
                value.compute(parent.map(|p| p.padding.get(*side)), cache, em, ex);
            }
            Self::BorderWidth { side, value } => {
                value.compute(parent.map(|p| p.border.get(*side)), cache, em, ex);
            }
            // Percentage widths always have a containing block width to
            // resolve against.
            Self::Width(value) => value.compute(parent.map(|p| &p.width), cache, em, ex, false),
            Self::Height(value) => {
                value.compute(parent.map(|p| &p.height), cache, em, ex, height_auto);
            }
            Self::MinSize { axis, value } => {
                let cb_auto = *axis == Axis::Vertical && height_auto;
                value.compute(parent.map(|p| p.min_size(*axis)), cache, em, ex, cb_auto);
            }
            Self::MaxSize { axis, value } => {
                let cb_auto = *axis == Axis::Vertical && height_auto;
                value.compute(parent.map(|p| p.max_size(*axis)), cache, em, ex, cb_auto);
            }
        }
    }

    /// Write this value into the box owned by `updater`.
    pub fn apply(&self, updater: &mut ComputedValuesUpdater) {
        let computed = updater.box_mut();
        match *self {
            Self::Margin { side, value } => *computed.margin.get_mut(side) = value,
            Self::Padding { side, value } => *computed.padding.get_mut(side) = value,
            Self::BorderWidth { side, value } => *computed.border.get_mut(side) = value,
            Self::Width(value) => computed.width = value,
            Self::Height(value) => computed.height = value,
            Self::MinSize { axis, value } => *computed.min_size_mut(axis) = value,
            Self::MaxSize { axis, value } => *computed.max_size_mut(axis) = value,
        }
    }
}

/// The value text only (no property name), e.g. `-5px` or `auto`.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Margin { value, .. } => write!(f, "{value}"),
            Self::Padding { value, .. } => write!(f, "{value}"),
            Self::BorderWidth { value, .. } => write!(f, "{value}"),
            Self::Width(value) | Self::Height(value) => write!(f, "{value}"),
            Self::MinSize { value, .. } => write!(f, "{value}"),
            Self::MaxSize { value, .. } => write!(f, "{value}"),
        }
    }
}
