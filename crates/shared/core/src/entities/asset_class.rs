use serde::{Deserialize, Serialize};

/// Asset class an instrument's PnL is booked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Option,
    Future,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Option => write!(f, "Option"),
            AssetClass::Future => write!(f, "Future"),
        }
    }
}
