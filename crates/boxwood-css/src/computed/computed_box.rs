//! The computed box-model values of one element.

use serde::Serialize;

use crate::values::{
    Axis, BorderWidth, BoxSide, Length, MEDIUM_PX, MarginWidth, MaxSize, MinSize, PaddingWidth,
    Size,
};

/// Four values, one per side of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxEdges<T> {
    /// Top edge.
    pub top: T,
    /// Right edge.
    pub right: T,
    /// Bottom edge.
    pub bottom: T,
    /// Left edge.
    pub left: T,
}

impl<T: Copy> BoxEdges<T> {
    /// The same value on every side.
    #[must_use]
    pub const fn uniform(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Build from values in shorthand order (top, right, bottom, left).
    #[must_use]
    pub const fn from_array([top, right, bottom, left]: [T; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl<T> BoxEdges<T> {
    /// The value for `side`.
    #[must_use]
    pub const fn get(&self, side: BoxSide) -> &T {
        match side {
            BoxSide::Top => &self.top,
            BoxSide::Right => &self.right,
            BoxSide::Bottom => &self.bottom,
            BoxSide::Left => &self.left,
        }
    }

    /// Mutable access to the value for `side`.
    pub const fn get_mut(&mut self, side: BoxSide) -> &mut T {
        match side {
            BoxSide::Top => &mut self.top,
            BoxSide::Right => &mut self.right,
            BoxSide::Bottom => &mut self.bottom,
            BoxSide::Left => &mut self.left,
        }
    }
}

/// [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
///
/// Computed margin, border, padding and size values of an element.
/// [`Default`] gives the computed initial values, so a box built from an
/// empty style is ready for layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedBox {
    /// `margin-*`
    pub margin: BoxEdges<MarginWidth>,
    /// `border-*-width`
    pub border: BoxEdges<BorderWidth>,
    /// `padding-*`
    pub padding: BoxEdges<PaddingWidth>,
    /// `width`
    pub width: Size,
    /// `height`
    pub height: Size,
    /// `min-width`
    pub min_width: MinSize,
    /// `min-height`
    pub min_height: MinSize,
    /// `max-width`
    pub max_width: MaxSize,
    /// `max-height`
    pub max_height: MaxSize,
}

impl Default for ComputedBox {
    fn default() -> Self {
        Self {
            margin: BoxEdges::uniform(MarginWidth::default()),
            // "medium", already computed.
            border: BoxEdges::uniform(BorderWidth::Length(Length::px(MEDIUM_PX))),
            padding: BoxEdges::uniform(PaddingWidth::default()),
            width: Size::Auto,
            height: Size::Auto,
            min_width: MinSize::default(),
            min_height: MinSize::default(),
            max_width: MaxSize::None,
            max_height: MaxSize::None,
        }
    }
}

impl ComputedBox {
    /// `min-width` or `min-height`.
    #[must_use]
    pub const fn min_size(&self, axis: Axis) -> &MinSize {
        match axis {
            Axis::Horizontal => &self.min_width,
            Axis::Vertical => &self.min_height,
        }
    }

    /// Mutable `min-width` or `min-height`.
    pub const fn min_size_mut(&mut self, axis: Axis) -> &mut MinSize {
        match axis {
            Axis::Horizontal => &mut self.min_width,
            Axis::Vertical => &mut self.min_height,
        }
    }

    /// `max-width` or `max-height`.
    #[must_use]
    pub const fn max_size(&self, axis: Axis) -> &MaxSize {
        match axis {
            Axis::Horizontal => &self.max_width,
            Axis::Vertical => &self.max_height,
        }
    }

    /// Mutable `max-width` or `max-height`.
    pub const fn max_size_mut(&mut self, axis: Axis) -> &mut MaxSize {
        match axis {
            Axis::Horizontal => &mut self.max_width,
            Axis::Vertical => &mut self.max_height,
        }
    }
}
