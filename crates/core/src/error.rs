use thiserror::Error;

/// A collection name that is not one of `activities`, `searches`, `learnings`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown collection: {name}")]
pub struct UnknownCollectionError {
    pub name: String,
}
