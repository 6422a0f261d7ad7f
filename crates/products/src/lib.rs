//! Products domain module.
//!
//! The product record, its validation rules and the ledger operations that
//! create, read and remove it. Records live in the external ledger keyed by
//! product name; this crate holds no state of its own.

pub mod operations;
pub mod product;

pub use operations::{add, delete, query};
pub use product::{NewProduct, Product};
