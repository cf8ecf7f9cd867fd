//! Service layer for analytics-log
//!
//! Centralizes the read-modify-write cycle between HTTP handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod collection_service;
mod error;

pub use collection_service::CollectionService;
pub use error::ServiceError;
