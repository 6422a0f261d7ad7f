use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use prodchain_core::{ChaincodeError, ChaincodeResult, Entity};

/// Validated input of the `add` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub state: String,
    pub org: String,
}

impl NewProduct {
    /// Parse `[name, description, state, org]`.
    ///
    /// Arguments are checked in order; the first empty one is reported by
    /// its ordinal position.
    pub fn from_args(args: &[String]) -> ChaincodeResult<Self> {
        let [name, description, state, org] = args else {
            return Err(ChaincodeError::client("Incorrect number of arguments. Expecting 4"));
        };

        for (idx, arg) in args.iter().enumerate() {
            if arg.is_empty() {
                return Err(ChaincodeError::client(format!(
                    "{} argument must be a non-empty string",
                    ordinal(idx + 1)
                )));
            }
        }

        Ok(Self {
            name: name.clone(),
            description: description.clone(),
            state: state.clone(),
            org: org.clone(),
        })
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Product record as stored on the ledger, under its `name`.
///
/// The serialized field names are an external contract shared with records
/// already on the ledger and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productObjectType")]
    object_type: String,
    #[serde(rename = "productName")]
    name: String,
    #[serde(rename = "productDesc")]
    description: String,
    #[serde(rename = "productState")]
    state: String,
    #[serde(rename = "productOrg")]
    org: String,
    #[serde(rename = "DateCreated")]
    date_created: DateTime<Utc>,
    #[serde(rename = "DateUpdated")]
    date_updated: DateTime<Utc>,
}

impl Product {
    /// Build a fresh record; both timestamps are set to `now`.
    pub fn create(new: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            object_type: Self::OBJECT_TYPE.to_string(),
            name: new.name,
            description: new.description,
            state: new.state,
            org: new.org,
            date_created: now,
            date_updated: now,
        }
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    pub fn date_updated(&self) -> DateTime<Utc> {
        self.date_updated
    }

    /// Encode to the ledger wire format (JSON).
    pub fn to_bytes(&self) -> ChaincodeResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| ChaincodeError::internal(format!("product serialization failed: {e}")))
    }

    /// Decode a record previously returned by `query`.
    pub fn from_bytes(bytes: &[u8]) -> ChaincodeResult<Self> {
        let product: Self = serde_json::from_slice(bytes)
            .map_err(|e| ChaincodeError::internal(format!("product deserialization failed: {e}")))?;
        if product.object_type != Self::OBJECT_TYPE {
            return Err(ChaincodeError::internal(format!(
                "record '{}' has object type '{}', expected '{}'",
                product.name,
                product.object_type,
                Self::OBJECT_TYPE
            )));
        }
        Ok(product)
    }
}

impl Entity for Product {
    type Id = String;

    const OBJECT_TYPE: &'static str = "product";

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
