//! Solver error types

use shared::SharedError;
use thiserror::Error;

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;

/// Solver error types
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("A search is already in progress")]
    Busy,

    #[error("Price sum overflow: {price} + {increment}")]
    PriceOverflow { price: u64, increment: u64 },

    #[error("Search failed: {message}")]
    SearchFailed { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
