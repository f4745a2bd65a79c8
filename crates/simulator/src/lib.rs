//! Market Maker Simulator
//!
//! Discrete-time simulation of a market maker quoting an option and futures
//! book off a single underlying:
//!
//! - **Price process**: arithmetic random walk driven by an injected random source
//! - **Quoting**: fixed spread around the mid
//! - **Repricing**: Black-Scholes for options, spot for futures
//! - **Execution**: unconditional or inventory-directed trading, PnL per asset class
//! - **Simulation**: the tick loop tying these together
//!
//! ## Architecture
//!
//! ```text
//!  VolatilityProvider      RandomSource
//!          │                    │
//!          ▼                    ▼
//!   ┌─────────────────────────────────┐
//!   │           Simulation            │
//!   │                                 │
//!   │  price process ─► quote         │
//!   │        │                        │
//!   │        ▼                        │
//!   │  reprice book ─► execute ─► PnL │
//!   └───────────────┬─────────────────┘
//!                   │ trades / snapshots / summary
//!                   ▼
//!               Reporter
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mmsim::{ConstantVolatility, RecordingReporter, SeededNormal, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_seed(7)
//!     .with_option("AAPL", 120.0, 0.25, 1)
//!     .with_future("ES", 1.0, -1);
//!
//! let mut sim = Simulation::new(
//!     config,
//!     SeededNormal::new(7),
//!     ConstantVolatility::new(0.1),
//!     RecordingReporter::new(),
//! )
//! .unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.ticks, 10);
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export key types at crate root
pub use application::{
    ExecutionEngine, ExecutionMode, ExecutionPolicy, InventoryDirected, RunState, Simulation,
    Unconditional, next_price, quote,
};
pub use domain::{Book, FutureContract, Instrument, OptionContract, PricingContext};
pub use error::{ConfigError, SimulationError};
pub use infrastructure::{
    ChannelReporter, ConstantVolatility, LogReporter, RecordingReporter, ReportEvent,
    ScriptedSource, SeededNormal, SimulationConfig, load_config, load_config_from_str,
    load_default_config,
};
