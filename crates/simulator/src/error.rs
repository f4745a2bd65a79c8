//! Simulator errors

use mmsim_pricing::PricingError;
use thiserror::Error;

/// Errors detected while loading or validating a run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidInput(String),
}

/// Errors that abort a simulation run
///
/// Every variant is fatal: the run moves to `Finished` and no further ticks
/// are executed.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Pricing failed at tick {tick} for {symbol}: {source}")]
    Pricing {
        tick: u64,
        symbol: String,
        #[source]
        source: PricingError,
    },

    #[error("Invalid volatility {value} at tick {tick}")]
    InvalidVolatility { tick: u64, value: f64 },

    #[error("Simulation already finished")]
    Finished,
}

impl SimulationError {
    /// Tick the run failed in, if the failure happened mid-run
    pub fn tick(&self) -> Option<u64> {
        match self {
            SimulationError::Pricing { tick, .. } | SimulationError::InvalidVolatility { tick, .. } => {
                Some(*tick)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
