//! Error types for the core library
//!
//! Every variant represents a persistence-layer failure. The service
//! layer performs no recovery and no translation; errors surface
//! unchanged to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
