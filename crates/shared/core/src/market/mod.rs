//! Market-side value types: the maker's two-sided quote and the
//! underlying's state for the current tick.

mod quote;
mod state;

pub use quote::Quote;
pub use state::MarketState;
