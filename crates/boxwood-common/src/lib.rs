//! Common utilities for the Boxwood style engine.
//!
//! This crate provides shared infrastructure used by the style crates:
//! - **Warning System** - deduplicated, colored terminal output for dropped
//!   declarations and unsupported features

pub mod warning;
