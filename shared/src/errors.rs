//! Shared error types for the price-combination solver

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Malformed request: {message}")]
    ProtocolError { message: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
