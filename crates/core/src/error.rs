//! Chaincode error model.

use thiserror::Error;

/// Result type used across the chaincode operations.
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;

/// Failure of a single chaincode invocation.
///
/// Every variant is terminal for the invocation. The message is returned to
/// the caller verbatim, so it carries no prefix of its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChaincodeError {
    /// Caller-supplied input was rejected (argument count, empty field,
    /// non-integer value, duplicate key, unknown function).
    #[error("{0}")]
    Client(String),

    /// The requested key holds no value.
    #[error("{0}")]
    NotFound(String),

    /// The ledger accessor failed or the caller credential could not be
    /// decoded.
    #[error("{0}")]
    Internal(String),
}

impl ChaincodeError {
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the failure originates from the caller's input rather than
    /// from the system.
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client(_) | Self::NotFound(_))
    }
}
