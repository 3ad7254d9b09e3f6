//! CSS property parsing and value computation for the Boxwood layout engine.
//!
//! # Pipeline
//!
//! 1. **Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!    turns declaration text into [`CSSToken`]s.
//! 2. **Declaration parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!    splits tokens into `name: value [!important]` [`Declaration`]s.
//! 3. **Property parsers**, looked up by name in a [`ParserRegistry`], turn
//!    value tokens into [`PropertyValue`]s. Malformed values are dropped.
//! 4. **Computation** ([CSS Cascading Level 4 § 4.4](https://www.w3.org/TR/css-cascade-4/#computed))
//!    resolves `inherit`, unusable percentages and relative units against
//!    the parent box and a [`ResourceCache`].
//! 5. The [`ComputedValuesUpdater`] writes each computed value into a
//!    [`ComputedBox`] for layout.
//!
//! # Supported properties
//!
//! - `margin`, `margin-{top,right,bottom,left}`
//! - `padding`, `padding-{top,right,bottom,left}`
//! - `border-width`, `border-{top,right,bottom,left}-width`
//! - `width`, `height`, `min-width`, `min-height`, `max-width`, `max-height`
//!
//! # Not Yet Implemented
//!
//! - `calc()` and other math functions
//! - Viewport and root-relative units (vw, vh, rem)
//! - Selector matching and cross-origin cascade

/// Computed values, the resource cache and the per-element cascade.
pub mod computed;
/// Configuration and registry errors.
pub mod error;
/// Declaration-list parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Property parsers and the parser registry.
pub mod properties;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Property value types.
pub mod values;

// Re-exports for convenience
pub use computed::{
    BoxEdges, CacheConfig, ComputeContext, ComputedBox, ComputedValuesUpdater, FontMetrics,
    ResourceCache, SpecifiedStyle, compute_box,
};
pub use error::{ConfigError, RegistryError};
pub use parser::{Declaration, DeclarationParser, parse_style_attribute};
pub use properties::{ParserRegistry, PropertyParser};
pub use tokenizer::{CSSToken, CSSTokenizer, tokenize};
pub use values::{
    Axis, BorderWidth, BoxSide, Length, LengthUnit, MarginWidth, MaxSize, MinSize, PaddingWidth,
    PropertyValue, Size,
};

/// Parse a declaration list (e.g. a `style` attribute) into the winning
/// specified value of each property.
#[must_use]
pub fn parse_style(registry: &ParserRegistry, text: &str) -> SpecifiedStyle {
    SpecifiedStyle::from_declarations(registry, &parse_style_attribute(text))
}
