//! Simulation Loop
//!
//! The tick state machine. Each tick runs, strictly in order:
//!
//! 1. volatility from the provider, keyed on the current price
//! 2. new mid from the price process
//! 3. bid/ask from the quote engine
//! 4. reprice options (Black-Scholes) and futures (spot)
//! 5. sort options by price
//! 6. execute every instrument into the running PnL
//! 7. snapshot to the reporter
//!
//! Any pricing fault is fatal: the run stops in `Finished` and the error
//! names the tick and instrument. The market state only moves once the whole
//! book has repriced, so a failed tick leaves the last good mid in place.

use log::{debug, error, info, warn};
use mmsim_core::{MarketState, PnlAccumulator, RunSummary, TickSnapshot, TradeRecord};
use mmsim_ports::{RandomSource, Reporter, VolatilityProvider};

use super::execution::ExecutionEngine;
use super::price_process::next_price;
use super::quoting::quote;
use crate::domain::{Book, PricingContext};
use crate::error::{Result, SimulationError};
use crate::infrastructure::SimulationConfig;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    /// Last completed tick (1-based)
    Running { tick: u64 },
    Finished,
}

/// A single market-making run
///
/// Owns the market state, the book and the PnL for its whole lifetime.
pub struct Simulation<R, V, P> {
    config: SimulationConfig,
    random: R,
    volatility: V,
    reporter: P,
    engine: ExecutionEngine,
    book: Book,
    market: MarketState,
    pnl: PnlAccumulator,
    state: RunState,
    ticks_done: u64,
    trades: u64,
    report_failures: u64,
}

impl<R, V, P> Simulation<R, V, P>
where
    R: RandomSource,
    V: VolatilityProvider,
    P: Reporter,
{
    /// Create a new simulation from a validated configuration
    pub fn new(config: SimulationConfig, random: R, volatility: V, reporter: P) -> Result<Self> {
        config.validate()?;
        let book = config.build_book()?;
        let engine = ExecutionEngine::from_mode(config.execution);
        let market = MarketState::new(config.initial_price);

        info!(
            "Market Maker Simulation: initial_price={} spread={} ticks={} instruments={} policy={} random={}",
            config.initial_price,
            config.spread,
            config.num_ticks,
            book.len(),
            engine.policy_name(),
            random.name()
        );
        for instrument in book.iter() {
            debug!("Book: {} qty={}", instrument, instrument.quantity());
        }

        Ok(Self {
            config,
            random,
            volatility,
            reporter,
            engine,
            book,
            market,
            pnl: PnlAccumulator::new(),
            state: RunState::NotStarted,
            ticks_done: 0,
            trades: 0,
            report_failures: 0,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn market(&self) -> &MarketState {
        &self.market
    }

    pub fn pnl(&self) -> PnlAccumulator {
        self.pnl
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    pub fn into_reporter(self) -> P {
        self.reporter
    }

    /// Summary of the ticks completed so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.ticks_done,
            final_price: self.market.current_price,
            pnl: self.pnl,
            trades: self.trades,
            report_failures: self.report_failures,
        }
    }

    /// Run every remaining tick
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.state != RunState::Finished {
            self.tick()?;
        }
        Ok(self.summary())
    }

    /// Run a single tick
    ///
    /// After the configured number of ticks the run moves to `Finished` and
    /// the summary is reported; further calls return
    /// [`SimulationError::Finished`].
    pub fn tick(&mut self) -> Result<TickSnapshot> {
        let tick = match self.state {
            RunState::NotStarted => 1,
            RunState::Running { tick } => tick + 1,
            RunState::Finished => return Err(SimulationError::Finished),
        };

        match self.advance(tick) {
            Ok(snapshot) => {
                self.ticks_done = tick;
                self.state = RunState::Running { tick };
                if tick >= self.config.num_ticks {
                    self.finish();
                }
                Ok(snapshot)
            }
            Err(err) => {
                error!("Aborting run: {}", err);
                self.state = RunState::Finished;
                Err(err)
            }
        }
    }

    fn advance(&mut self, tick: u64) -> Result<TickSnapshot> {
        // 1. Volatility for this tick
        let volatility = self.volatility.volatility(self.market.current_price);
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(SimulationError::InvalidVolatility {
                tick,
                value: volatility,
            });
        }

        // 2. Price process
        let mid = next_price(self.market.current_price, volatility, &mut self.random);

        // 3. Quote
        let quote = quote(mid, self.config.spread);

        // 4. Reprice the whole book before anything reads a price
        let ctx = PricingContext {
            spot: mid,
            rate: self.config.risk_free_rate,
            volatility,
        };
        for instrument in self.book.iter_mut() {
            instrument
                .reprice(&ctx)
                .map_err(|source| SimulationError::Pricing {
                    tick,
                    symbol: instrument.symbol().to_string(),
                    source,
                })?;
        }
        self.market.update(mid, quote);

        // 5. Cosmetic ordering
        self.book.sort_options_by_price();

        // 6. Execute
        let mut pnl = self.pnl;
        let mut trades: Vec<TradeRecord> = Vec::new();
        for instrument in self.book.iter() {
            let execution = self.engine.execute(tick, instrument, &quote, pnl);
            pnl = execution.pnl;
            trades.extend(execution.trades);
        }
        self.pnl = pnl;
        self.trades += trades.len() as u64;

        for trade in &trades {
            if let Err(err) = self.reporter.on_trade(trade) {
                self.report_failed("trade", tick, err);
            }
        }

        // 7. Snapshot
        let snapshot = TickSnapshot {
            tick,
            mid,
            bid: quote.bid,
            ask: quote.ask,
            volatility,
            instruments: self.book.marks(),
            pnl: self.pnl,
        };
        debug!(
            "Tick {}: mid={:.4} bid={:.4} ask={:.4} pnl=[{}]",
            tick, mid, quote.bid, quote.ask, self.pnl
        );
        if let Err(err) = self.reporter.on_snapshot(&snapshot) {
            self.report_failed("snapshot", tick, err);
        }

        Ok(snapshot)
    }

    fn finish(&mut self) {
        self.state = RunState::Finished;
        let summary = self.summary();
        info!("Simulation complete: {}", summary);
        if let Err(err) = self.reporter.on_finish(&summary) {
            self.report_failed("summary", summary.ticks, err);
        }
    }

    fn report_failed(&mut self, what: &str, tick: u64, err: mmsim_ports::ReportError) {
        self.report_failures += 1;
        warn!("Reporter failed on {} at tick {}: {}", what, tick, err);
    }
}
