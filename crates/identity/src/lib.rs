//! `prodchain-identity` — derives the caller's identity from the creator
//! credential attached to a transaction.
//!
//! Only two fields are extracted (subject common name, issuer organization).
//! The certificate is **not** validated: no signature, expiry, revocation or
//! chain-of-trust checks happen here.

pub mod extract;
#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use extract::{extract_identity, CallerIdentity, IdentityParseError};
