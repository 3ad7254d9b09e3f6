//! CSS property value types
//!
//! - [CSS Values and Units Level 3](https://www.w3.org/TR/css-values-3/)
//! - [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)
//! - [CSS 2.1 § 10 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)

mod border_width;
mod length;
mod margin;
mod padding;
mod property;
mod size;

pub use border_width::{BorderWidth, MEDIUM_PX, THICK_PX, THIN_PX};
pub use length::{Length, LengthUnit};
pub use margin::MarginWidth;
pub use padding::PaddingWidth;
pub use property::{Axis, BoxSide, PropertyValue};
pub use size::{MaxSize, MinSize, Size};
