//! CSS declaration parser module.

/// Declaration-list parsing per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod declaration;

pub use declaration::{Declaration, DeclarationParser, parse_style_attribute};
