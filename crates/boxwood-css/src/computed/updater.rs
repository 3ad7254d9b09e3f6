//! Writes computed property values into a [`ComputedBox`].

use super::ComputedBox;

/// Target of [`PropertyValue::apply`](crate::PropertyValue::apply).
///
/// No validation happens here: values are expected to be computed already.
#[derive(Debug, Clone, Default)]
pub struct ComputedValuesUpdater {
    computed: ComputedBox,
}

impl ComputedValuesUpdater {
    /// Start from an existing box (usually `ComputedBox::default()`).
    #[must_use]
    pub const fn new(computed: ComputedBox) -> Self {
        Self { computed }
    }

    /// The box being written.
    pub const fn box_mut(&mut self) -> &mut ComputedBox {
        &mut self.computed
    }

    /// Hand back the finished box.
    #[must_use]
    pub fn finish(self) -> ComputedBox {
        self.computed
    }
}
