//! Line-oriented transaction session over an in-memory ledger.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use prodchain_chaincode::Chaincode;
use prodchain_shim::{ChaincodeStub, InMemoryState, Response, TransactionRequest};

/// Status written for input lines that are not a valid transaction.
pub const MALFORMED_LINE_STATUS: u16 = 400;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Init,
    #[default]
    Invoke,
}

/// One transaction of the input stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TxLine {
    #[serde(default)]
    pub kind: TxKind,
    /// Function name followed by its parameters.
    pub args: Vec<String>,
    /// PEM text or serialized identity; falls back to the session default.
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub tx_id: Option<String>,
}

/// One response of the output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseLine {
    pub status: u16,
    pub message: String,
    /// Payload decoded as UTF-8, lossily.
    pub payload: String,
}

impl From<Response> for ResponseLine {
    fn from(value: Response) -> Self {
        Self {
            status: value.status,
            message: value.message,
            payload: String::from_utf8_lossy(&value.payload).into_owned(),
        }
    }
}

pub struct Session<C> {
    chaincode: C,
    state: InMemoryState,
    default_creator: Option<Vec<u8>>,
}

impl<C: Chaincode> Session<C> {
    pub fn new(chaincode: C, default_creator: Option<Vec<u8>>) -> Self {
        Self {
            chaincode,
            state: InMemoryState::new(),
            default_creator,
        }
    }

    pub fn state(&self) -> &InMemoryState {
        &self.state
    }

    /// Run `init` with `args` (no function name).
    pub fn init(&self, args: &[String]) -> Response {
        let stub = TransactionRequest::new("", args.iter().cloned());
        self.chaincode.init(&stub, &self.state)
    }

    pub fn execute(&self, tx: TxLine) -> Response {
        let mut stub = TransactionRequest::from_args(tx.args);
        if let Some(tx_id) = tx.tx_id {
            stub = stub.with_tx_id(tx_id);
        }
        match tx.creator.map(String::into_bytes).or_else(|| self.default_creator.clone()) {
            Some(creator) => stub = stub.with_creator(creator),
            None => tracing::debug!(tx_id = %stub.tx_id(), "transaction has no creator"),
        }

        match tx.kind {
            TxKind::Init => self.chaincode.init(&stub, &self.state),
            TxKind::Invoke => self.chaincode.invoke(&stub, &self.state),
        }
    }

    /// Execute one raw input line.
    pub fn execute_line(&self, line: &str) -> ResponseLine {
        match serde_json::from_str::<TxLine>(line) {
            Ok(tx) => self.execute(tx).into(),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed transaction line");
                ResponseLine {
                    status: MALFORMED_LINE_STATUS,
                    message: format!("malformed transaction: {e}"),
                    payload: String::new(),
                }
            }
        }
    }

    /// Process every non-blank line of `input`, writing one response line
    /// per transaction. Returns the number of transactions processed.
    pub fn run<R, W>(&self, input: R, mut output: W) -> anyhow::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut count = 0;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.execute_line(&line);
            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            count += 1;
        }
        output.flush()?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodchain_chaincode::ProductChaincode;
    use prodchain_identity::fixtures;
    use prodchain_shim::status;

    fn session() -> Session<ProductChaincode> {
        let pem = fixtures::creator_pem("Admin@org1", "Org1.example.com");
        Session::new(ProductChaincode::default(), Some(pem.into_bytes()))
    }

    fn run(session: &Session<ProductChaincode>, input: &str) -> Vec<serde_json::Value> {
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn runs_a_transaction_script() {
        let session = session();
        let script = r#"
{"kind":"init","args":["init","a","100","b","200"]}
{"args":["add","widget","blue widget","created","Org1"]}
{"args":["query","widget"]}

{"args":["query","a"]}
{"args":["delete","widget"]}
{"args":["query","widget"]}
"#;
        let out = run(&session, script);
        let statuses: Vec<u64> = out.iter().map(|r| r["status"].as_u64().unwrap()).collect();
        assert_eq!(statuses, vec![200, 200, 200, 200, 200, 404]);
        assert!(out[2]["payload"].as_str().unwrap().contains("\"productName\":\"widget\""));
        assert_eq!(out[3]["payload"], "100");
        assert_eq!(out[5]["message"], "Entity not found");
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let session = session();
        let out = run(&session, "not json\n{\"args\":[\"query\",\"x\"]}\n");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["status"], 400);
        assert!(out[0]["message"].as_str().unwrap().starts_with("malformed transaction"));
        assert_eq!(out[1]["status"], 404);
    }

    #[test]
    fn explicit_creator_is_used_without_default() {
        let session = Session::new(ProductChaincode::default(), None);
        let resp = session.execute(TxLine {
            kind: TxKind::Invoke,
            args: vec!["query".to_string(), "x".to_string()],
            creator: None,
            tx_id: Some("tx-1".to_string()),
        });
        assert_eq!(resp.status, status::ERROR);

        let pem = fixtures::creator_pem("User1@org2", "Org2.example.com");
        let resp = session.execute(TxLine {
            kind: TxKind::Invoke,
            args: vec!["query".to_string(), "x".to_string()],
            creator: Some(pem),
            tx_id: None,
        });
        assert_eq!(resp.status, status::NOT_FOUND);
    }

    #[test]
    fn init_helper_seeds_state() {
        let session = session();
        let args: Vec<String> = ["a", "1", "b", "2"].iter().map(|s| s.to_string()).collect();
        assert!(session.init(&args).is_ok());
        assert_eq!(session.state().len(), 2);
    }
}
