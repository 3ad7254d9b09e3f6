//! CSS Length values
//!
//! [CSS Values and Units Level 3](https://www.w3.org/TR/css-values-3/#lengths)

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-3/#lengths)
///
/// Units are matched ASCII case-insensitively and serialize in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// "1px = 1/96th of 1in"
    Px,
    /// "1pt = 1/72nd of 1in"
    Pt,
    /// "1pc = 1/6th of 1in"
    Pc,
    /// "1in = 2.54cm = 96px"
    In,
    /// "1cm = 96px/2.54"
    Cm,
    /// "1mm = 1/10th of 1cm"
    Mm,
    /// "Equal to the computed value of the font-size property of the element"
    Em,
    /// "Equal to the used x-height of the first available font"
    Ex,
}

/// A `<length>`: a number and a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// The numeric part.
    pub value: f32,
    /// The unit.
    pub unit: LengthUnit,
}

impl Length {
    /// Create a length.
    #[must_use]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel length.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// The same length with its sign flipped.
    #[must_use]
    pub fn negated(self) -> Self {
        Self::new(-self.value, self.unit)
    }

    /// Returns true for lengths below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.value < 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parse_is_case_insensitive() {
        assert_eq!("PX".parse::<LengthUnit>(), Ok(LengthUnit::Px));
        assert_eq!("Em".parse::<LengthUnit>(), Ok(LengthUnit::Em));
        assert!("vmin".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::px(-5.0).to_string(), "-5px");
        assert_eq!(Length::new(1.5, LengthUnit::Em).to_string(), "1.5em");
    }
}
