//! Application layer: the per-tick pipeline and the loop that drives it
//!
//! Contains:
//! - **price_process**: random walk for the underlying mid
//! - **quoting**: symmetric bid/ask around the mid
//! - **execution**: trading policies and PnL booking
//! - **simulation**: the tick state machine

pub mod execution;
pub mod price_process;
pub mod quoting;
pub mod simulation;

pub use execution::{
    Execution, ExecutionEngine, ExecutionMode, ExecutionPolicy, Fill, InventoryDirected,
    Unconditional,
};
pub use price_process::next_price;
pub use quoting::quote;
pub use simulation::{RunState, Simulation};
