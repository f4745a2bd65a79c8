use serde::{Deserialize, Serialize};

use super::{AssetClass, Side};
use crate::values::{Price, Quantity, Symbol};

/// A single execution against the market maker's own quote
///
/// `price` is the quoted price the trade happened at (bid for buys, ask for
/// sells) and `fair_value` is the instrument's model price in the same tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Tick the trade was executed in (1-based)
    pub tick: u64,
    pub symbol: Symbol,
    pub asset_class: AssetClass,
    pub side: Side,
    /// Quoted price traded at
    pub price: Price,
    /// Instrument fair value at execution time
    pub fair_value: Price,
    pub quantity: Quantity,
}

impl TradeRecord {
    /// Realized PnL of this trade against the instrument's fair value
    ///
    /// Buys earn `fair_value - price` per unit, sells earn `price - fair_value`.
    pub fn pnl(&self) -> f64 {
        let edge = match self.side {
            Side::Buy => self.fair_value - self.price,
            Side::Sell => self.price - self.fair_value,
        };
        edge * self.quantity as f64
    }
}

impl std::fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} qty={} @ {:.4} (fair {:.4})",
            self.side, self.asset_class, self.symbol, self.quantity, self.price, self.fair_value
        )
    }
}
