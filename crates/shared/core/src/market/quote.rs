use serde::{Deserialize, Serialize};

use crate::values::Price;

/// Two-sided quote: the maker buys at `bid` and sells at `ask`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: Price,
    pub ask: Price,
}

impl Quote {
    pub fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }

    /// Width of the quote (`ask - bid`)
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Midpoint between bid and ask
    pub fn mid(&self) -> Price {
        (self.bid + self.ask) / 2.0
    }
}
