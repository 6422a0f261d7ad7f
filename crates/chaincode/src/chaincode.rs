use tracing::Span;

use prodchain_core::ChaincodeResult;
use prodchain_identity::extract_identity;
use prodchain_shim::{ChaincodeStub, Response, StateAccessor};

use crate::counters::init_counters;
use crate::operation::Operation;

/// Contract between the ledger runtime and a chaincode.
///
/// Both calls are synchronous and run once per transaction. The runtime owns
/// atomicity: if a call fails, it discards every write made through `state`.
pub trait Chaincode {
    /// One-time bootstrap at deployment.
    fn init(&self, stub: &dyn ChaincodeStub, state: &dyn StateAccessor) -> Response;

    /// Every subsequent transaction.
    fn invoke(&self, stub: &dyn ChaincodeStub, state: &dyn StateAccessor) -> Response;
}

/// Product registry chaincode.
///
/// Holds no ledger state; the only thing it carries across invocations is
/// the span its per-invocation spans are parented to.
#[derive(Debug, Clone)]
pub struct ProductChaincode {
    span: Span,
}

impl ProductChaincode {
    pub fn new(name: &str) -> Self {
        Self::with_span(tracing::info_span!("chaincode", chaincode = name))
    }

    /// Use `span` as the parent of every invocation span.
    pub fn with_span(span: Span) -> Self {
        Self { span }
    }

    fn route(&self, stub: &dyn ChaincodeStub, state: &dyn StateAccessor) -> ChaincodeResult<Vec<u8>> {
        let creator = stub.creator()?;
        let identity = extract_identity(creator)?;
        tracing::debug!("transaction creator {identity}");

        let args = stub.parameters();
        match stub.function().parse::<Operation>()? {
            Operation::Add => prodchain_products::add(state, args, stub.tx_timestamp()),
            Operation::Delete => prodchain_products::delete(state, args),
            Operation::Query => prodchain_products::query(state, args),
        }
    }
}

impl Default for ProductChaincode {
    fn default() -> Self {
        Self::new("SimpleChaincode")
    }
}

impl Chaincode for ProductChaincode {
    fn init(&self, stub: &dyn ChaincodeStub, state: &dyn StateAccessor) -> Response {
        let span = tracing::debug_span!(parent: &self.span, "init", tx_id = %stub.tx_id());
        let _enter = span.enter();

        respond(init_counters(state, stub.parameters()))
    }

    fn invoke(&self, stub: &dyn ChaincodeStub, state: &dyn StateAccessor) -> Response {
        let span = tracing::debug_span!(
            parent: &self.span,
            "invoke",
            tx_id = %stub.tx_id(),
            function = %stub.function(),
        );
        let _enter = span.enter();

        respond(self.route(stub, state))
    }
}

fn respond(result: ChaincodeResult<Vec<u8>>) -> Response {
    match &result {
        Ok(_) => tracing::debug!("transaction succeeded"),
        Err(err) if err.is_client() => tracing::debug!(error = %err, "transaction rejected"),
        Err(err) => tracing::warn!(error = %err, "transaction failed"),
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodchain_identity::fixtures;
    use prodchain_shim::{status, InMemoryState, TransactionRequest};

    fn creator() -> Vec<u8> {
        let pem = fixtures::creator_pem("Admin@org1", "Org1.example.com");
        fixtures::serialized_identity("Org1MSP", &pem)
    }

    fn invoke(state: &InMemoryState, args: &[&str]) -> Response {
        let stub = TransactionRequest::from_args(args.iter().copied()).with_creator(creator());
        ProductChaincode::default().invoke(&stub, state)
    }

    #[test]
    fn unknown_function_is_forbidden() {
        let state = InMemoryState::new();
        let resp = invoke(&state, &["transfer", "a", "b"]);
        assert_eq!(resp.status, status::FORBIDDEN);
        assert_eq!(resp.message, "Invalid invoke function name.");
    }

    #[test]
    fn missing_creator_is_internal_error() {
        let state = InMemoryState::new();
        let stub = TransactionRequest::new("query", ["widget"]).with_tx_id("tx-9");
        let resp = ProductChaincode::default().invoke(&stub, &state);
        assert_eq!(resp.status, status::ERROR);
        assert_eq!(resp.message, "creator certificate is not available: transaction tx-9");
    }

    #[test]
    fn malformed_creator_is_internal_error_before_dispatch() {
        let state = InMemoryState::new();
        let stub = TransactionRequest::from_args(["add", "w", "d", "s", "o"]).with_creator(b"Org1MSP".to_vec());
        let resp = ProductChaincode::default().invoke(&stub, &state);
        assert_eq!(resp.status, status::ERROR);
        assert_eq!(resp.message, "creator credential contains no PEM block");
        assert!(state.is_empty());
    }

    #[test]
    fn invoke_routes_add_and_query() {
        let state = InMemoryState::new();
        assert_eq!(invoke(&state, &["add", "widget", "d", "s", "o"]).status, status::OK);

        let resp = invoke(&state, &["query", "widget"]);
        assert_eq!(resp.status, status::OK);
        assert_eq!(resp.payload, state.get_state("widget").unwrap().unwrap());
    }

    #[test]
    fn add_uses_transaction_timestamp() {
        use chrono::TimeZone;

        let state = InMemoryState::new();
        let ts = chrono::Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let stub = TransactionRequest::from_args(["add", "widget", "d", "s", "o"])
            .with_creator(creator())
            .with_timestamp(ts);
        assert!(ProductChaincode::default().invoke(&stub, &state).is_ok());

        let stored = state.get_state("widget").unwrap().unwrap();
        let product = prodchain_products::Product::from_bytes(&stored).unwrap();
        assert_eq!(product.date_created(), ts);
        assert_eq!(product.date_updated(), ts);
    }

    #[test]
    fn init_ignores_function_name() {
        let state = InMemoryState::new();
        let stub = TransactionRequest::from_args(["init", "a", "100", "b", "200"]);
        let resp = ProductChaincode::default().init(&stub, &state);
        assert_eq!(resp, Response::success(Vec::<u8>::new()));
        assert_eq!(state.get_state("a").unwrap(), Some(b"100".to_vec()));
        assert_eq!(state.get_state("b").unwrap(), Some(b"200".to_vec()));
    }

    #[test]
    fn init_does_not_need_a_creator() {
        let state = InMemoryState::new();
        let stub = TransactionRequest::new("", ["a", "1", "b", "x"]);
        let resp = ProductChaincode::default().init(&stub, &state);
        assert_eq!(resp.status, status::FORBIDDEN);
        assert_eq!(resp.message, "Expecting integer value for asset holding");
    }
}
