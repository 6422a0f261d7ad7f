use core::str::FromStr;

use prodchain_core::ChaincodeError;

/// Functions accepted by `invoke`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Delete,
    Query,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Delete, Operation::Query];

    /// Function name on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Delete => "delete",
            Operation::Query => "query",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ChaincodeError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ChaincodeError::client("Invalid invoke function name."))
    }
}
