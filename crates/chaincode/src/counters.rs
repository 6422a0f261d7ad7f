//! Legacy bootstrap counters written by `init`.
//!
//! Two named integers stored as decimal strings. Unrelated to products; kept
//! as a deployment smoke test.

use prodchain_core::{ChaincodeError, ChaincodeResult};
use prodchain_shim::StateAccessor;

/// Parse `[name_a, value_a, name_b, value_b]` and store both values.
///
/// Both values are parsed before anything is written.
pub fn init_counters(state: &dyn StateAccessor, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    let [a, a_val, b, b_val] = args else {
        return Err(ChaincodeError::client("Incorrect number of arguments. Expecting 4"));
    };

    let a_val = parse_holding(a_val)?;
    let b_val = parse_holding(b_val)?;
    tracing::debug!(a_val, b_val, "parsed asset holdings");

    state.put_state(a, a_val.to_string().into_bytes())?;
    state.put_state(b, b_val.to_string().into_bytes())?;

    Ok(Vec::new())
}

fn parse_holding(value: &str) -> ChaincodeResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| ChaincodeError::client("Expecting integer value for asset holding"))
}
