//! `prodchain-core` — shared building blocks of the chaincode.
//!
//! This crate contains **pure** primitives (no ledger access, no IO).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{ChaincodeError, ChaincodeResult};
