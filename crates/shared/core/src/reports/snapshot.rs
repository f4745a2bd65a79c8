use serde::{Deserialize, Serialize};

use crate::entities::{AssetClass, PnlAccumulator};
use crate::values::{Price, Quantity, Symbol, Volatility};

/// An instrument's repriced value as seen at the end of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentMark {
    pub symbol: Symbol,
    pub asset_class: AssetClass,
    pub price: Price,
    pub quantity: Quantity,
}

/// Everything observable after one simulation tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Tick number (1-based)
    pub tick: u64,
    pub mid: Price,
    pub bid: Price,
    pub ask: Price,
    /// Volatility used for this tick's price shock and option pricing
    pub volatility: Volatility,
    /// Instrument marks in book order (options by price, then futures)
    pub instruments: Vec<InstrumentMark>,
    /// Running PnL after this tick's executions
    pub pnl: PnlAccumulator,
}

impl TickSnapshot {
    /// Find an instrument mark by symbol
    pub fn mark(&self, symbol: &str) -> Option<&InstrumentMark> {
        self.instruments.iter().find(|m| m.symbol == symbol)
    }
}
