use std::sync::Arc;

use thiserror::Error;

use prodchain_core::ChaincodeError;

/// Ledger accessor failure.
///
/// These are **storage** errors as opposed to validation errors; the
/// chaincode never retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The key was rejected by the ledger (e.g. empty).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The underlying store failed.
    #[error("{0}")]
    Backend(String),
}

impl From<StateError> for ChaincodeError {
    fn from(value: StateError) -> Self {
        ChaincodeError::internal(value.to_string())
    }
}

/// Key/value accessor over the external ledger.
///
/// Keys and values are opaque to the accessor. Implementations must treat
/// deleting an absent key as a no-op, and must report "no value" as
/// `Ok(None)` rather than an error.
///
/// Writes are applied in program order; atomicity of the whole invocation is
/// the ledger's responsibility, not the accessor's.
pub trait StateAccessor: Send + Sync {
    /// Read the value stored under `key`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Write `value` under `key`, replacing any existing value.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Remove `key`.
    fn del_state(&self, key: &str) -> Result<(), StateError>;
}

impl<S> StateAccessor for Arc<S>
where
    S: StateAccessor + ?Sized,
{
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        (**self).put_state(key, value)
    }

    fn del_state(&self, key: &str) -> Result<(), StateError> {
        (**self).del_state(key)
    }
}
