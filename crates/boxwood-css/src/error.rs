//! Error types for the style engine.
//!
//! Malformed CSS never produces an error: invalid declarations are dropped.
//! The errors here are configuration mistakes made by the host application.

use thiserror::Error;

/// A parser could not be added to a [`ParserRegistry`](crate::ParserRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another parser already handles this property.
    #[error("property '{name}' is already handled by another parser")]
    DuplicateProperty {
        /// The lowercase property name.
        name: String,
    },

    /// The parser declares no property names.
    #[error("parser declares no property names")]
    EmptyParser,
}

/// Invalid [`CacheConfig`](crate::CacheConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric setting is zero, negative, or not finite.
    #[error("invalid {field}: {value} (expected a positive number)")]
    InvalidValue {
        /// The offending setting.
        field: &'static str,
        /// Its value.
        value: f32,
    },

    /// The configuration text is not valid JSON for the expected shape.
    #[error("failed to read configuration: {0}")]
    Json(#[from] serde_json::Error),
}
