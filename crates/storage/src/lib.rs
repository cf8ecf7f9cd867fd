//! Storage layer for analytics-log
//!
//! The whole document lives in one JSON file. Every read parses the entire
//! file and every write replaces it; there is no locking and no crash-safe
//! write protocol.

mod error;
mod json_file;
mod traits;

pub use error::StorageError;
pub use json_file::{DB_FILE_NAME, JsonFileStore};
pub use traits::DocumentStore;
