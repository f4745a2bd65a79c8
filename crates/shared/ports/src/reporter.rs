use mmsim_core::{RunSummary, TickSnapshot, TradeRecord};

use crate::error::ReportResult;

/// Port for the consumer of simulation output
///
/// Implementations must not block for long: the simulation calls these on
/// its hot path. Buffer or drop on backpressure instead.
pub trait Reporter {
    /// A trade was executed against the maker's quote
    fn on_trade(&mut self, trade: &TradeRecord) -> ReportResult<()>;

    /// A tick completed
    fn on_snapshot(&mut self, snapshot: &TickSnapshot) -> ReportResult<()>;

    /// The run completed all of its ticks
    fn on_finish(&mut self, summary: &RunSummary) -> ReportResult<()>;
}

impl<T: Reporter + ?Sized> Reporter for Box<T> {
    fn on_trade(&mut self, trade: &TradeRecord) -> ReportResult<()> {
        (**self).on_trade(trade)
    }

    fn on_snapshot(&mut self, snapshot: &TickSnapshot) -> ReportResult<()> {
        (**self).on_snapshot(snapshot)
    }

    fn on_finish(&mut self, summary: &RunSummary) -> ReportResult<()> {
        (**self).on_finish(summary)
    }
}
