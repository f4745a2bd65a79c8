//! Execution Engine
//!
//! Turns the tick's quote and an instrument's fair value into trades and
//! books their realized PnL. Two policies sit behind [`ExecutionPolicy`]:
//!
//! - [`Unconditional`]: both sides trade every tick, whatever the position
//! - [`InventoryDirected`]: longs are sold into the ask, shorts bought back
//!   at the bid, flat positions do nothing
//!
//! The two give different PnL paths for the same prices, so a run picks one
//! via [`ExecutionMode`] and keeps it.

use log::debug;
use mmsim_core::{PnlAccumulator, Price, Quantity, Quote, Side, TradeRecord};
use serde::{Deserialize, Serialize};

use crate::domain::Instrument;

/// One leg a policy wants executed against the quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

/// Decides which legs trade for an instrument given the current quote
pub trait ExecutionPolicy: Send + Sync {
    fn name(&self) -> &str;

    /// Legs to execute for `instrument` at `quote`
    fn fills(&self, instrument: &Instrument, quote: &Quote) -> Vec<Fill>;
}

/// Quote both sides every tick with the position size as given
///
/// Buys `quantity` at the bid and sells `quantity` at the ask, so each
/// instrument earns `spread * quantity` per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconditional;

impl ExecutionPolicy for Unconditional {
    fn name(&self) -> &str {
        "Unconditional"
    }

    fn fills(&self, instrument: &Instrument, quote: &Quote) -> Vec<Fill> {
        let quantity = instrument.quantity();
        vec![
            Fill {
                side: Side::Buy,
                price: quote.bid,
                quantity,
            },
            Fill {
                side: Side::Sell,
                price: quote.ask,
                quantity,
            },
        ]
    }
}

/// Trade only to work down the existing position
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryDirected;

impl ExecutionPolicy for InventoryDirected {
    fn name(&self) -> &str {
        "InventoryDirected"
    }

    fn fills(&self, instrument: &Instrument, quote: &Quote) -> Vec<Fill> {
        let quantity = instrument.quantity();
        match quantity.signum() {
            1 => vec![Fill {
                side: Side::Sell,
                price: quote.ask,
                quantity,
            }],
            -1 => vec![Fill {
                side: Side::Buy,
                price: quote.bid,
                quantity: quantity.abs(),
            }],
            _ => Vec::new(),
        }
    }
}

/// Execution policy selected per run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    Unconditional,
    InventoryDirected,
}

impl ExecutionMode {
    pub fn policy(&self) -> Box<dyn ExecutionPolicy> {
        match self {
            ExecutionMode::Unconditional => Box::new(Unconditional),
            ExecutionMode::InventoryDirected => Box::new(InventoryDirected),
        }
    }
}

/// Result of executing one instrument
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    /// Accumulator after this instrument's trades
    pub pnl: PnlAccumulator,
    pub trades: Vec<TradeRecord>,
}

/// Applies a policy and books the resulting trades
pub struct ExecutionEngine {
    policy: Box<dyn ExecutionPolicy>,
}

impl ExecutionEngine {
    pub fn new(policy: Box<dyn ExecutionPolicy>) -> Self {
        Self { policy }
    }

    pub fn from_mode(mode: ExecutionMode) -> Self {
        Self::new(mode.policy())
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Execute `instrument` against `quote`, returning the updated accumulator
    ///
    /// The instrument's fair value must already be repriced for this tick.
    pub fn execute(
        &self,
        tick: u64,
        instrument: &Instrument,
        quote: &Quote,
        pnl: PnlAccumulator,
    ) -> Execution {
        let mut pnl = pnl;
        let mut trades = Vec::new();

        for fill in self.policy.fills(instrument, quote) {
            let trade = TradeRecord {
                tick,
                symbol: instrument.symbol().to_string(),
                asset_class: instrument.asset_class(),
                side: fill.side,
                price: fill.price,
                fair_value: instrument.price(),
                quantity: fill.quantity,
            };
            pnl = pnl.record(&trade);
            debug!("[{}] {} pnl={:.6}", self.policy.name(), trade, trade.pnl());
            trades.push(trade);
        }

        Execution { pnl, trades }
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::from_mode(ExecutionMode::default())
    }
}

impl std::fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("policy", &self.policy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FutureContract, OptionContract, PricingContext};
    use approx::assert_abs_diff_eq;
    use mmsim_core::AssetClass;

    /// Future marked at 100 with the given position
    fn future(quantity: i64) -> Instrument {
        let mut instrument: Instrument = FutureContract::new("ES", 1.0, quantity).unwrap().into();
        instrument
            .reprice(&PricingContext {
                spot: 100.0,
                rate: 0.05,
                volatility: 0.1,
            })
            .unwrap();
        instrument
    }

    fn quote() -> Quote {
        Quote::new(99.0, 101.0)
    }

    #[test]
    fn test_inventory_long_sells_into_ask() {
        let engine = ExecutionEngine::from_mode(ExecutionMode::InventoryDirected);
        let result = engine.execute(1, &future(5), &quote(), PnlAccumulator::new());

        assert_eq!(result.trades.len(), 1);
        assert_eq!(result.trades[0].side, Side::Sell);
        assert_eq!(result.trades[0].price, 101.0);
        assert_eq!(result.pnl.futures, 5.0);
    }

    #[test]
    fn test_inventory_short_buys_at_bid() {
        let engine = ExecutionEngine::from_mode(ExecutionMode::InventoryDirected);
        let result = engine.execute(1, &future(-3), &quote(), PnlAccumulator::new());

        assert_eq!(result.trades.len(), 1);
        assert_eq!(result.trades[0].side, Side::Buy);
        assert_eq!(result.trades[0].quantity, 3);
        assert_eq!(result.pnl.futures, 3.0);
    }

    #[test]
    fn test_inventory_largest_short_bought_back_in_full() {
        let engine = ExecutionEngine::from_mode(ExecutionMode::InventoryDirected);
        let result = engine.execute(1, &future(i64::MIN + 1), &quote(), PnlAccumulator::new());

        assert_eq!(result.trades[0].side, Side::Buy);
        assert_eq!(result.trades[0].quantity, i64::MAX);
        assert!(result.pnl.futures > 0.0);
    }

    #[test]
    fn test_inventory_flat_does_nothing() {
        let engine = ExecutionEngine::from_mode(ExecutionMode::InventoryDirected);
        let start = PnlAccumulator::new().add(AssetClass::Future, 1.25);
        let result = engine.execute(1, &future(0), &quote(), start);

        assert!(result.trades.is_empty());
        assert_eq!(result.pnl, start);
    }

    #[test]
    fn test_unconditional_books_both_legs() {
        let engine = ExecutionEngine::default();
        assert_eq!(engine.policy_name(), "Unconditional");

        let result = engine.execute(1, &future(4), &quote(), PnlAccumulator::new());

        assert_eq!(result.trades.len(), 2);
        // (100 - 99) * 4 + (101 - 100) * 4
        assert_eq!(result.pnl.futures, 8.0);
    }

    #[test]
    fn test_unconditional_keeps_sign_of_short() {
        let engine = ExecutionEngine::from_mode(ExecutionMode::Unconditional);
        let result = engine.execute(1, &future(-2), &quote(), PnlAccumulator::new());
        assert_eq!(result.pnl.futures, -4.0);
    }

    #[test]
    fn test_unconditional_is_spread_times_quantity() {
        let engine = ExecutionEngine::from_mode(ExecutionMode::Unconditional);
        let mut option: Instrument = OptionContract::call("AAPL", 95.0, 0.25, 7).unwrap().into();
        option
            .reprice(&PricingContext {
                spot: 100.0,
                rate: 0.05,
                volatility: 0.1,
            })
            .unwrap();

        let q = Quote::new(99.75, 100.25);
        let result = engine.execute(2, &option, &q, PnlAccumulator::new());

        assert_abs_diff_eq!(result.pnl.options, 0.5 * 7.0, epsilon = 1e-9);
        assert_eq!(result.pnl.futures, 0.0);
        assert!(result.trades.iter().all(|t| t.tick == 2 && t.symbol == "AAPL"));
    }

    #[test]
    fn test_mode_serde() {
        let mode: ExecutionMode = serde_json::from_str("\"inventory_directed\"").unwrap();
        assert_eq!(mode, ExecutionMode::InventoryDirected);
        assert_eq!(mode.policy().name(), "InventoryDirected");
    }
}
