//! Reporters
//!
//! - [`LogReporter`]: human-readable lines through the `log` facade
//! - [`RecordingReporter`]: keeps everything in memory
//! - [`ChannelReporter`]: forwards events over a bounded tokio channel and
//!   drops them when the consumer falls behind

use log::info;
use mmsim_core::{RunSummary, TickSnapshot, TradeRecord};
use mmsim_ports::{ReportError, ReportResult, Reporter};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Everything a reporter can be told, as one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    Trade(TradeRecord),
    Snapshot(TickSnapshot),
    Finished(RunSummary),
}

impl ReportEvent {
    /// Hand this event to `reporter`
    pub fn dispatch<R: Reporter + ?Sized>(&self, reporter: &mut R) -> ReportResult<()> {
        match self {
            ReportEvent::Trade(trade) => reporter.on_trade(trade),
            ReportEvent::Snapshot(snapshot) => reporter.on_snapshot(snapshot),
            ReportEvent::Finished(summary) => reporter.on_finish(summary),
        }
    }
}

/// Writes each event as a log line
#[derive(Debug, Clone, Default)]
pub struct LogReporter {
    /// Skip per-trade lines
    quiet_trades: bool,
}

impl LogReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only log snapshots and the final summary
    pub fn without_trades() -> Self {
        Self { quiet_trades: true }
    }
}

impl Reporter for LogReporter {
    fn on_trade(&mut self, trade: &TradeRecord) -> ReportResult<()> {
        if !self.quiet_trades {
            info!(
                "{} {} Order: {} Price: {:.4} Qty: {}",
                trade.side, trade.asset_class, trade.symbol, trade.price, trade.quantity
            );
        }
        Ok(())
    }

    fn on_snapshot(&mut self, snapshot: &TickSnapshot) -> ReportResult<()> {
        info!(
            "Iteration {}: mid={:.4} bid={:.4} ask={:.4} options_pnl={:.4} futures_pnl={:.4}",
            snapshot.tick,
            snapshot.mid,
            snapshot.bid,
            snapshot.ask,
            snapshot.pnl.options,
            snapshot.pnl.futures
        );
        for mark in &snapshot.instruments {
            info!(
                "  {} {}: {:.6} (qty {})",
                mark.asset_class, mark.symbol, mark.price, mark.quantity
            );
        }
        Ok(())
    }

    fn on_finish(&mut self, summary: &RunSummary) -> ReportResult<()> {
        info!("Simulation finished: {}", summary);
        Ok(())
    }
}

/// Keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub trades: Vec<TradeRecord>,
    pub snapshots: Vec<TickSnapshot>,
    pub summary: Option<RunSummary>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn on_trade(&mut self, trade: &TradeRecord) -> ReportResult<()> {
        self.trades.push(trade.clone());
        Ok(())
    }

    fn on_snapshot(&mut self, snapshot: &TickSnapshot) -> ReportResult<()> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn on_finish(&mut self, summary: &RunSummary) -> ReportResult<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}

/// Non-blocking bridge to an async consumer
///
/// Uses `try_send`, so a full channel drops the event and returns
/// [`ReportError::Dropped`] instead of stalling the simulation.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: mpsc::Sender<ReportEvent>,
    dropped: u64,
}

impl ChannelReporter {
    pub fn new(tx: mpsc::Sender<ReportEvent>) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Create a reporter and the receiving end of its channel
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ReportEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Events dropped because the channel was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn send(&mut self, event: ReportEvent) -> ReportResult<()> {
        match self.tx.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                Err(ReportError::Dropped)
            }
            Err(TrySendError::Closed(_)) => Err(ReportError::Closed),
        }
    }
}

impl Reporter for ChannelReporter {
    fn on_trade(&mut self, trade: &TradeRecord) -> ReportResult<()> {
        self.send(ReportEvent::Trade(trade.clone()))
    }

    fn on_snapshot(&mut self, snapshot: &TickSnapshot) -> ReportResult<()> {
        self.send(ReportEvent::Snapshot(snapshot.clone()))
    }

    fn on_finish(&mut self, summary: &RunSummary) -> ReportResult<()> {
        self.send(ReportEvent::Finished(summary.clone()))
    }
}
