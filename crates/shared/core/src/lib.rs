//! Market Maker Simulator Core
//!
//! Pure value types shared by every crate of the simulator.
//! This crate contains no I/O, no randomness, and is 100% unit testable.

pub mod entities;
pub mod market;
pub mod reports;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{AssetClass, OptionType, PnlAccumulator, Side, TradeRecord};
pub use market::{MarketState, Quote};
pub use reports::{InstrumentMark, RunSummary, TickSnapshot};
pub use values::{Price, Quantity, Symbol, Volatility};
