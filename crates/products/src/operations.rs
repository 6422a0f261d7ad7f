//! Ledger operations over product records.
//!
//! Each operation performs at most one read and one write through the
//! accessor, in program order, and returns the response payload. Failures are
//! terminal: nothing written earlier in the invocation is undone here.

use chrono::{DateTime, Utc};

use prodchain_core::{ChaincodeError, ChaincodeResult};
use prodchain_shim::StateAccessor;

use crate::product::{NewProduct, Product};

/// Create a product from `[name, description, state, org]`.
///
/// Fails if any value (even an empty one) is already stored under `name`.
pub fn add(state: &dyn StateAccessor, args: &[String], now: DateTime<Utc>) -> ChaincodeResult<Vec<u8>> {
    let new = NewProduct::from_args(args)?;

    let existing = state
        .get_state(&new.name)
        .map_err(|e| ChaincodeError::internal(format!("Failed to get product: {e}")))?;
    if existing.is_some() {
        tracing::debug!(product = %new.name, "product already exists");
        return Err(ChaincodeError::client(format!(
            "This product already exists: {}",
            new.name
        )));
    }

    let product = Product::create(new, now);
    state.put_state(product.name(), product.to_bytes()?)?;

    tracing::debug!(product = %product.name(), org = %product.org(), "product added");
    Ok(Vec::new())
}

/// Remove the product named by `[name]`.
///
/// No existence check; removing an absent key is left to the accessor.
pub fn delete(state: &dyn StateAccessor, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    let name = single_arg(args)?;
    state.del_state(name)?;

    tracing::debug!(product = %name, "product deleted");
    Ok(Vec::new())
}

/// Return the raw bytes stored for the product named by `[name]`.
pub fn query(state: &dyn StateAccessor, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    let name = single_arg(args)?;
    state
        .get_state(name)?
        .ok_or_else(|| ChaincodeError::not_found("Entity not found"))
}

fn single_arg(args: &[String]) -> ChaincodeResult<&str> {
    match args {
        [name] => Ok(name.as_str()),
        _ => Err(ChaincodeError::client("Incorrect number of arguments")),
    }
}
