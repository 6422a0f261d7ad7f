//! `prodchain-runner` — development host for the product chaincode.
//!
//! Feeds transactions read as JSON lines to the chaincode over an in-memory
//! ledger and writes one JSON response per transaction. It stands in for the
//! ledger runtime during local testing; there is no transport, endorsement or
//! persistence.

pub mod config;
pub mod session;

pub use config::{ConfigError, RunnerConfig};
pub use session::{ResponseLine, Session, TxKind, TxLine};
