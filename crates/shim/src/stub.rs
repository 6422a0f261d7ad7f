use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use prodchain_core::ChaincodeError;

/// Failure to read data from the request context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StubError {
    #[error("creator certificate is not available: {0}")]
    CreatorUnavailable(String),
}

impl From<StubError> for ChaincodeError {
    fn from(value: StubError) -> Self {
        ChaincodeError::internal(value.to_string())
    }
}

/// Request context of a single invocation.
///
/// State access is deliberately **not** part of this trait; the ledger
/// accessor is passed alongside it as a separate capability.
pub trait ChaincodeStub {
    /// Raw credential of the transaction submitter.
    fn creator(&self) -> Result<&[u8], StubError>;

    /// Function name (first transaction argument).
    fn function(&self) -> &str;

    /// Remaining transaction arguments, in order.
    fn parameters(&self) -> &[String];

    /// Transaction identifier assigned by the runtime.
    fn tx_id(&self) -> &str;

    /// Timestamp of the transaction proposal.
    fn tx_timestamp(&self) -> DateTime<Utc>;
}

/// Owned request context, built by hosts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    tx_id: String,
    timestamp: DateTime<Utc>,
    creator: Option<Vec<u8>>,
    function: String,
    parameters: Vec<String>,
}

impl TransactionRequest {
    /// New request with a fresh UUIDv7 transaction id, stamped with the
    /// current time and without a creator.
    pub fn new<I, S>(function: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tx_id: Uuid::now_v7().to_string(),
            timestamp: Utc::now(),
            creator: None,
            function: function.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw argument list into function name and parameters.
    ///
    /// An empty list yields an empty function name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let function: String = args.next().unwrap_or_default();
        Self::new(function, args)
    }

    pub fn with_creator(mut self, creator: impl Into<Vec<u8>>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_tx_id(mut self, tx_id: impl Into<String>) -> Self {
        self.tx_id = tx_id.into();
        self
    }
}

impl ChaincodeStub for TransactionRequest {
    fn creator(&self) -> Result<&[u8], StubError> {
        self.creator
            .as_deref()
            .ok_or_else(|| StubError::CreatorUnavailable(format!("transaction {}", self.tx_id)))
    }

    fn function(&self) -> &str {
        &self.function
    }

    fn parameters(&self) -> &[String] {
        &self.parameters
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn tx_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
