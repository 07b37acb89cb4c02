//! Error types for the fraud engine

use thiserror::Error;

/// Fraud engine error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A field required by the rule about to run is missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
