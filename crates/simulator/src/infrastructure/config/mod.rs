//! Configuration loading for the simulator
//!
//! A run is described by one JSON document:
//! - Underlying: initial price, quoted spread, volatility, risk-free rate
//! - Run length and optional random seed
//! - Execution policy
//! - Option and future instruments with their starting positions
//!
//! The configuration is validated once and then treated as immutable for the
//! whole run.

use mmsim_core::{OptionType, Price, Quantity, Volatility};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::application::ExecutionMode;
use crate::domain::{Book, FutureContract, OptionContract};
use crate::error::ConfigError;

/// Root configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Starting mid price of the underlying
    #[serde(default = "default_initial_price")]
    pub initial_price: Price,

    /// Full quoted spread (ask - bid)
    #[serde(default = "default_spread")]
    pub spread: f64,

    /// Volatility for the constant provider
    #[serde(default = "default_volatility")]
    pub volatility: Volatility,

    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Number of ticks to simulate
    #[serde(default = "default_num_ticks")]
    pub num_ticks: u64,

    /// Random seed for reproducible runs (entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub execution: ExecutionMode,

    #[serde(default)]
    pub options: Vec<OptionConfig>,

    #[serde(default)]
    pub futures: Vec<FutureConfig>,
}

/// An option in the starting book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionConfig {
    pub symbol: String,
    pub strike: Price,
    /// Time to expiry in years
    pub expiry: f64,
    #[serde(default)]
    pub option_type: OptionType,
    #[serde(default)]
    pub quantity: Quantity,
}

/// A future in the starting book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureConfig {
    pub symbol: String,
    /// Time to expiry in years
    pub expiry: f64,
    #[serde(default)]
    pub quantity: Quantity,
}

fn default_initial_price() -> Price {
    100.0
}

fn default_spread() -> f64 {
    1.0
}

fn default_volatility() -> Volatility {
    0.1
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_num_ticks() -> u64 {
    10
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_price: default_initial_price(),
            spread: default_spread(),
            volatility: default_volatility(),
            risk_free_rate: default_risk_free_rate(),
            num_ticks: default_num_ticks(),
            seed: None,
            execution: ExecutionMode::default(),
            options: Vec::new(),
            futures: Vec::new(),
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_option(
        mut self,
        symbol: impl Into<String>,
        strike: Price,
        expiry: f64,
        quantity: Quantity,
    ) -> Self {
        self.options.push(OptionConfig {
            symbol: symbol.into(),
            strike,
            expiry,
            option_type: OptionType::Call,
            quantity,
        });
        self
    }

    pub fn with_future(mut self, symbol: impl Into<String>, expiry: f64, quantity: Quantity) -> Self {
        self.futures.push(FutureConfig {
            symbol: symbol.into(),
            expiry,
            quantity,
        });
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_price.is_finite() && self.initial_price > 0.0) {
            return Err(invalid(format!(
                "initial_price must be positive, got {}",
                self.initial_price
            )));
        }
        if !(self.spread.is_finite() && self.spread >= 0.0) {
            return Err(invalid(format!(
                "spread must be non-negative, got {}",
                self.spread
            )));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(invalid(format!(
                "volatility must be positive, got {}",
                self.volatility
            )));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(invalid(format!(
                "risk_free_rate must be finite, got {}",
                self.risk_free_rate
            )));
        }
        if self.num_ticks == 0 {
            return Err(invalid("num_ticks must be at least 1".to_string()));
        }

        let mut seen = HashSet::new();
        let symbols = self
            .options
            .iter()
            .map(|o| &o.symbol)
            .chain(self.futures.iter().map(|f| &f.symbol));
        for symbol in symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(invalid(format!("duplicate instrument symbol: {symbol}")));
            }
        }

        // Instrument-level checks live with the contract constructors
        self.build_book().map(|_| ())
    }

    /// Build the starting book from the configured instruments
    pub fn build_book(&self) -> Result<Book, ConfigError> {
        let mut book = Book::new();
        for option in &self.options {
            book.add(OptionContract::new(
                option.symbol.clone(),
                option.strike,
                option.expiry,
                option.option_type,
                option.quantity,
            )?);
        }
        for future in &self.futures {
            book.add(FutureContract::new(
                future.symbol.clone(),
                future.expiry,
                future.quantity,
            )?);
        }
        Ok(book)
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidInput(message)
}

/// Load simulation configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SimulationConfig, ConfigError> {
    let config: SimulationConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<SimulationConfig, ConfigError> {
    let default_config = include_str!("default_config.json");
    load_config_from_str(default_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config.initial_price, 100.0);
        assert_eq!(config.spread, 1.0);
        assert_eq!(config.volatility, 0.1);
        assert_eq!(config.risk_free_rate, 0.05);
        assert_eq!(config.num_ticks, 10);
        assert_eq!(config.execution, ExecutionMode::Unconditional);
        assert_eq!(config.options.len(), 4);
        assert_eq!(config.futures.len(), 4);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = load_config_from_str(r#"{ "num_ticks": 3 }"#).unwrap();
        assert_eq!(config.num_ticks, 3);
        assert_eq!(config.initial_price, 100.0);
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_option_type_and_quantity_defaults() {
        let json = r#"{ "options": [ { "symbol": "AAPL", "strike": 120.0, "expiry": 0.25 } ] }"#;
        let config = load_config_from_str(json).unwrap();
        assert_eq!(config.options[0].option_type, OptionType::Call);
        assert_eq!(config.options[0].quantity, 0);
    }

    #[test]
    fn test_rejects_non_positive_initial_price() {
        let err = load_config_from_str(r#"{ "initial_price": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_negative_spread() {
        let config = SimulationConfig {
            spread: -0.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_zero_ticks() {
        let config = SimulationConfig {
            num_ticks: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_instruments() {
        let duplicate = SimulationConfig::default()
            .with_option("ES", 100.0, 0.5, 0)
            .with_future("ES", 1.0, 0);
        assert!(duplicate.validate().is_err());

        let bad_strike = SimulationConfig::default().with_option("AAPL", -120.0, 0.25, 0);
        assert!(bad_strike.validate().is_err());

        let empty_symbol = SimulationConfig::default().with_future("", 1.0, 0);
        assert!(empty_symbol.validate().is_err());

        let unbounded_short = SimulationConfig::default().with_future("ES", 1.0, i64::MIN);
        assert!(matches!(
            unbounded_short.validate(),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = load_config_from_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/mmsim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_build_book() {
        let config = load_default_config().unwrap();
        let book = config.build_book().unwrap();
        assert_eq!(book.options().len(), 4);
        assert_eq!(book.futures().len(), 4);
        assert!(book.get("GC").is_some());
    }
}
