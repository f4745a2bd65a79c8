use serde::{Deserialize, Serialize};

use crate::entities::PnlAccumulator;
use crate::values::Price;

/// Final result of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ticks executed
    pub ticks: u64,
    /// Underlying mid after the last tick
    pub final_price: Price,
    /// Final PnL totals
    pub pnl: PnlAccumulator,
    /// Trades executed over the run
    pub trades: u64,
    /// Reporter calls that failed (the run carries on regardless)
    pub report_failures: u64,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ticks={} final_price={:.4} trades={} options_pnl={:.4} futures_pnl={:.4}",
            self.ticks, self.final_price, self.trades, self.pnl.options, self.pnl.futures
        )
    }
}
