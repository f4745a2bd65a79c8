use serde::{Deserialize, Serialize};

use super::Quote;
use crate::values::Price;

/// Observable state of the underlying for the current tick
///
/// `bid_price < current_price < ask_price` whenever the spread is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    /// Underlying mid price
    pub current_price: Price,
    pub bid_price: Price,
    pub ask_price: Price,
}

impl MarketState {
    /// State before the first tick: bid and ask collapse onto the mid
    pub fn new(initial_price: Price) -> Self {
        Self {
            current_price: initial_price,
            bid_price: initial_price,
            ask_price: initial_price,
        }
    }

    /// Move to a new mid and the quote derived from it
    pub fn update(&mut self, mid: Price, quote: Quote) {
        self.current_price = mid;
        self.bid_price = quote.bid;
        self.ask_price = quote.ask;
    }

    pub fn quote(&self) -> Quote {
        Quote::new(self.bid_price, self.ask_price)
    }
}
