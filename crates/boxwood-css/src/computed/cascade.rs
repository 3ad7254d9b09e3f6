//! [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
//!
//! Resolution of one element's declarations into a [`ComputedBox`]. Only the
//! declarations of a single element are considered: the winner for each
//! property is the last declaration, unless an earlier one is `!important`
//! and the later one is not. Selector matching and origins are handled by
//! the caller.

use super::{ComputeContext, ComputedBox, ComputedValuesUpdater};
use crate::parser::Declaration;
use crate::properties::ParserRegistry;
use crate::values::PropertyValue;

/// A specified value and its importance.
#[derive(Debug, Clone, PartialEq)]
struct SpecifiedEntry {
    value: PropertyValue,
    important: bool,
}

/// The winning specified value of each property set on an element, in the
/// order the properties were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecifiedStyle {
    entries: Vec<SpecifiedEntry>,
}

impl SpecifiedStyle {
    /// An empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `declarations` through `registry` and keep the winners.
    /// Unknown and invalid declarations are skipped.
    #[must_use]
    pub fn from_declarations(registry: &ParserRegistry, declarations: &[Declaration]) -> Self {
        let mut style = Self::new();
        for declaration in declarations {
            for value in registry.parse_declaration(declaration) {
                style.set(value, declaration.important);
            }
        }
        style
    }

    /// [§ 6.1 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// Record `value`, replacing any earlier value of the same property
    /// unless that one is important and this one is not.
    pub fn set(&mut self, value: PropertyValue, important: bool) {
        let name = value.name();
        match self.entries.iter_mut().find(|e| e.value.name() == name) {
            Some(entry) if entry.important && !important => {}
            Some(entry) => *entry = SpecifiedEntry { value, important },
            None => self.entries.push(SpecifiedEntry { value, important }),
        }
    }

    /// The winning value for `name` (ASCII case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|e| e.value.name().eq_ignore_ascii_case(name))
            .map(|e| &e.value)
    }

    /// Returns true if the winning value for `name` is `!important`.
    #[must_use]
    pub fn is_important(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.important && e.value.name().eq_ignore_ascii_case(name))
    }

    /// All winning values.
    pub fn values(&self) -> impl Iterator<Item = &PropertyValue> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute an element's box from its specified style.
///
/// Properties without a specified value keep their initial values; none of
/// the box-model properties inherit unless `inherit` is specified.
#[must_use]
pub fn compute_box(
    specified: &SpecifiedStyle,
    parent: Option<&ComputedBox>,
    ctx: &ComputeContext<'_>,
) -> ComputedBox {
    let mut updater = ComputedValuesUpdater::new(ComputedBox::default());
    for value in specified.values() {
        let mut value = value.clone();
        value.compute(parent, ctx);
        value.apply(&mut updater);
    }
    updater.finish()
}
