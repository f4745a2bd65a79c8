use serde::{Deserialize, Serialize};

use super::{AssetClass, TradeRecord};

/// Running realized PnL, split by asset class
///
/// Starts at zero and is only ever moved forward by [`PnlAccumulator::record`],
/// which returns the updated value instead of mutating in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PnlAccumulator {
    pub options: f64,
    pub futures: f64,
}

impl PnlAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the bucket for `asset_class`
    #[must_use]
    pub fn add(self, asset_class: AssetClass, amount: f64) -> Self {
        match asset_class {
            AssetClass::Option => Self {
                options: self.options + amount,
                ..self
            },
            AssetClass::Future => Self {
                futures: self.futures + amount,
                ..self
            },
        }
    }

    /// Book a trade's realized PnL
    #[must_use]
    pub fn record(self, trade: &TradeRecord) -> Self {
        self.add(trade.asset_class, trade.pnl())
    }

    /// Running total for one asset class
    pub fn for_class(&self, asset_class: AssetClass) -> f64 {
        match asset_class {
            AssetClass::Option => self.options,
            AssetClass::Future => self.futures,
        }
    }

    pub fn total(&self) -> f64 {
        self.options + self.futures
    }
}

impl std::fmt::Display for PnlAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "options={:.4} futures={:.4} total={:.4}",
            self.options,
            self.futures,
            self.total()
        )
    }
}
