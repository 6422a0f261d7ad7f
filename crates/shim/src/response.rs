use prodchain_core::ChaincodeError;

/// Numeric statuses of the response protocol.
pub mod status {
    /// Success.
    pub const OK: u16 = 200;
    /// Statuses at or above this value are errors.
    pub const ERROR_THRESHOLD: u16 = 400;
    /// Caller input was rejected.
    pub const FORBIDDEN: u16 = 403;
    /// Requested key holds no value.
    pub const NOT_FOUND: u16 = 404;
    /// The chaincode or the ledger failed.
    pub const ERROR: u16 = 500;
}

/// Result of one `init`/`invoke`, handed back to the ledger runtime.
///
/// Successful responses carry a payload and an empty message; failed ones
/// carry a message and an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: status::OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(status::ERROR, message)
    }

    pub fn client_error(message: impl Into<String>) -> Self {
        Self::with_status(status::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(status::NOT_FOUND, message)
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status < status::ERROR_THRESHOLD
    }
}

impl From<ChaincodeError> for Response {
    fn from(value: ChaincodeError) -> Self {
        match value {
            ChaincodeError::Client(msg) => Response::client_error(msg),
            ChaincodeError::NotFound(msg) => Response::not_found(msg),
            ChaincodeError::Internal(msg) => Response::error(msg),
        }
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(value: Result<Vec<u8>, ChaincodeError>) -> Self {
        match value {
            Ok(payload) => Response::success(payload),
            Err(err) => err.into(),
        }
    }
}
