//! Property parsers
//!
//! Each parser owns a fixed set of property names and turns a declaration's
//! value tokens into [`PropertyValue`]s. Invalid input never fails loudly:
//! the parser simply emits nothing, and the declaration is dropped.

pub mod cursor;

mod border_width;
mod margin;
mod padding;
mod registry;
mod size;

pub use border_width::{BorderWidthLtrbParser, BorderWidthShorthandParser};
pub use margin::{MarginLtrbParser, MarginShorthandParser};
pub use padding::{PaddingLtrbParser, PaddingShorthandParser};
pub use registry::ParserRegistry;
pub use size::{MaxSizeParser, MinSizeParser, SizeParser};

use crate::tokenizer::CSSToken;
use crate::values::PropertyValue;

/// A parser for a group of related properties.
///
/// Implementations are stateless; one instance is shared by every parse.
pub trait PropertyParser: Send + Sync {
    /// The lowercase property names this parser handles. Must be non-empty.
    fn names(&self) -> &'static [&'static str];

    /// Parse `tokens` as the value of `name`, appending the results to
    /// `out`. Malformed input appends nothing.
    fn parse(&self, name: &str, tokens: &[CSSToken], out: &mut Vec<PropertyValue>);
}
