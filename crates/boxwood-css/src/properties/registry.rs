//! Property name → parser dispatch.

use core::fmt;
use std::collections::HashMap;

use boxwood_common::warning::warn_once;

use super::{
    BorderWidthLtrbParser, BorderWidthShorthandParser, MarginLtrbParser, MarginShorthandParser,
    MaxSizeParser, MinSizeParser, PaddingLtrbParser, PaddingShorthandParser, PropertyParser,
    SizeParser,
};
use crate::error::RegistryError;
use crate::parser::Declaration;
use crate::tokenizer::CSSToken;
use crate::values::PropertyValue;

/// Maps each property name to the one parser that handles it.
///
/// Build it once with [`ParserRegistry::standard`] (or [`register`] custom
/// parsers at startup) and share it by reference afterwards; lookups take
/// `&self`, so concurrent dispatch needs no locking.
///
/// [`register`]: ParserRegistry::register
#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn PropertyParser>>,
    /// Lowercase property name → index into `parsers`.
    by_name: HashMap<String, usize>,
}

impl ParserRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in parser.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if two built-in parsers claim the same name.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(Box::new(MarginLtrbParser))?;
        registry.register(Box::new(MarginShorthandParser))?;
        registry.register(Box::new(PaddingLtrbParser))?;
        registry.register(Box::new(PaddingShorthandParser))?;
        registry.register(Box::new(BorderWidthLtrbParser))?;
        registry.register(Box::new(BorderWidthShorthandParser))?;
        registry.register(Box::new(SizeParser))?;
        registry.register(Box::new(MinSizeParser))?;
        registry.register(Box::new(MaxSizeParser))?;
        Ok(registry)
    }

    /// Claim every name in `parser.names()` for `parser`.
    ///
    /// Either all names are registered or, on error, none are.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyParser`] if the parser declares no names.
    /// - [`RegistryError::DuplicateProperty`] if a name is already claimed,
    ///   or listed twice by the parser.
    pub fn register(&mut self, parser: Box<dyn PropertyParser>) -> Result<(), RegistryError> {
        let names = parser.names();
        if names.is_empty() {
            return Err(RegistryError::EmptyParser);
        }

        let mut keys: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let key = name.to_ascii_lowercase();
            if self.by_name.contains_key(&key) || keys.contains(&key) {
                return Err(RegistryError::DuplicateProperty { name: key });
            }
            keys.push(key);
        }

        let index = self.parsers.len();
        self.parsers.push(parser);
        self.by_name.extend(keys.into_iter().map(|key| (key, index)));
        Ok(())
    }

    /// The parser registered for `name` (ASCII case-insensitive).
    #[must_use]
    pub fn parser_for(&self, name: &str) -> Option<&dyn PropertyParser> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .and_then(|&index| self.parsers.get(index))
            .map(|parser| &**parser)
    }

    /// Returns true if some parser handles `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parse the value `tokens` of property `name`.
    ///
    /// Unknown properties and invalid values produce no values; both are
    /// reported through [`warn_once`] and otherwise ignored.
    #[must_use]
    pub fn dispatch(&self, name: &str, tokens: &[CSSToken]) -> Vec<PropertyValue> {
        let mut values = Vec::new();

        let Some(parser) = self.parser_for(name) else {
            warn_once("CSS", &format!("unknown property '{name}'"));
            return values;
        };

        parser.parse(name, tokens, &mut values);
        if values.is_empty() {
            warn_once("CSS", &format!("invalid value for '{name}'"));
        }
        values
    }

    /// Parse a declaration's value.
    #[must_use]
    pub fn parse_declaration(&self, declaration: &Declaration) -> Vec<PropertyValue> {
        self.dispatch(&declaration.name, &declaration.value)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.parsers.len())
            .field("names", &self.names())
            .finish()
    }
}
