use serde::{Deserialize, Serialize};

/// A single ranked row: what was gained and how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gain {
    pub name: String,
    pub amount: i64,
}

impl Gain {
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
