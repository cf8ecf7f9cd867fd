//! Core types for analytics-log
//!
//! This crate contains domain types shared across all other crates.

mod collection;
mod document;
mod env_config;
mod error;
mod record;

pub use collection::*;
pub use document::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use record::*;
