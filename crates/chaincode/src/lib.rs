//! `prodchain-chaincode` — transaction entry points.
//!
//! [`ProductChaincode`] implements the runtime's two-call contract:
//! `init` seeds the legacy counters once at deployment, `invoke` resolves the
//! caller and routes the transaction to a product operation.

pub mod chaincode;
pub mod counters;
pub mod operation;

pub use chaincode::{Chaincode, ProductChaincode};
pub use operation::Operation;
