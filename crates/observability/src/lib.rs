//! Tracing/logging setup shared by chaincode hosts.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{init, LogFormat, ParseLogFormatError};
