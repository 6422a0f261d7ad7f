//! `prodchain-shim` — the boundary between the chaincode and its host.
//!
//! The ledger runtime hands every invocation a request context
//! ([`ChaincodeStub`]) and a key/value accessor ([`StateAccessor`]), and gets
//! a [`Response`] back. Nothing in here knows about products.

pub mod in_memory;
pub mod response;
pub mod state;
pub mod stub;

pub use in_memory::InMemoryState;
pub use response::{status, Response};
pub use state::{StateAccessor, StateError};
pub use stub::{ChaincodeStub, StubError, TransactionRequest};
