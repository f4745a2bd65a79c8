use mmsim_core::{AssetClass, InstrumentMark, OptionType, Price, Quantity, Symbol, Volatility};
use mmsim_pricing::{BlackScholesInputs, PricingResult};

use crate::error::ConfigError;

/// Market inputs needed to reprice an instrument
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingContext {
    /// Underlying mid price for this tick
    pub spot: Price,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility for this tick
    pub volatility: Volatility,
}

/// A European option on the underlying (e.g. AAPL 120 C)
///
/// Strike, expiry, type and symbol are fixed at construction; only the fair
/// value moves, once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    symbol: Symbol,
    strike: Price,
    /// Time to expiry in years, constant for the run
    expiry: f64,
    option_type: OptionType,
    price: Price,
    quantity: Quantity,
}

impl OptionContract {
    /// Create a new option contract with no fair value yet
    pub fn new(
        symbol: impl Into<Symbol>,
        strike: Price,
        expiry: f64,
        option_type: OptionType,
        quantity: Quantity,
    ) -> Result<Self, ConfigError> {
        let symbol = validate_symbol(symbol.into())?;
        validate_positive(&symbol, "strike", strike)?;
        validate_positive(&symbol, "expiry", expiry)?;
        validate_quantity(&symbol, quantity)?;

        Ok(Self {
            symbol,
            strike,
            expiry,
            option_type,
            price: 0.0,
            quantity,
        })
    }

    /// Create a call option
    pub fn call(
        symbol: impl Into<Symbol>,
        strike: Price,
        expiry: f64,
        quantity: Quantity,
    ) -> Result<Self, ConfigError> {
        Self::new(symbol, strike, expiry, OptionType::Call, quantity)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn strike(&self) -> Price {
        self.strike
    }

    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Recompute the Black-Scholes fair value off the current spot
    pub fn reprice(&mut self, ctx: &PricingContext) -> PricingResult<Price> {
        let inputs =
            BlackScholesInputs::new(ctx.spot, self.strike, self.expiry, ctx.rate, ctx.volatility);
        self.price = inputs.price(self.option_type)?;
        Ok(self.price)
    }
}

/// A futures contract on the underlying (e.g. ES)
///
/// Tracks spot one-to-one: no cost of carry is modelled.
#[derive(Debug, Clone, PartialEq)]
pub struct FutureContract {
    symbol: Symbol,
    /// Time to expiry in years, constant for the run
    expiry: f64,
    price: Price,
    quantity: Quantity,
}

impl FutureContract {
    pub fn new(symbol: impl Into<Symbol>, expiry: f64, quantity: Quantity) -> Result<Self, ConfigError> {
        let symbol = validate_symbol(symbol.into())?;
        validate_positive(&symbol, "expiry", expiry)?;
        validate_quantity(&symbol, quantity)?;

        Ok(Self {
            symbol,
            expiry,
            price: 0.0,
            quantity,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Mark the future at the current spot
    pub fn reprice(&mut self, ctx: &PricingContext) -> Price {
        self.price = ctx.spot;
        self.price
    }
}

fn validate_symbol(symbol: Symbol) -> Result<Symbol, ConfigError> {
    if symbol.trim().is_empty() {
        return Err(ConfigError::InvalidInput(
            "instrument symbol must not be empty".to_string(),
        ));
    }
    Ok(symbol)
}

fn validate_positive(symbol: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidInput(format!(
            "{symbol}: {field} must be positive, got {value}"
        )))
    }
}

/// Positions must be negatable so a short can be bought back in full
fn validate_quantity(symbol: &str, quantity: Quantity) -> Result<(), ConfigError> {
    if quantity == Quantity::MIN {
        return Err(ConfigError::InvalidInput(format!(
            "{symbol}: quantity {quantity} is out of range"
        )));
    }
    Ok(())
}

/// Any instrument the maker can hold
///
/// Execution and the simulation loop only go through the methods here, never
/// through the concrete contract types.
#[derive(Debug, Clone, PartialEq)]
pub enum Instrument {
    Option(OptionContract),
    Future(FutureContract),
}

impl Instrument {
    pub fn symbol(&self) -> &str {
        match self {
            Instrument::Option(o) => o.symbol(),
            Instrument::Future(f) => f.symbol(),
        }
    }

    /// Last computed fair value
    pub fn price(&self) -> Price {
        match self {
            Instrument::Option(o) => o.price(),
            Instrument::Future(f) => f.price(),
        }
    }

    /// Signed position
    pub fn quantity(&self) -> Quantity {
        match self {
            Instrument::Option(o) => o.quantity(),
            Instrument::Future(f) => f.quantity(),
        }
    }

    pub fn expiry(&self) -> f64 {
        match self {
            Instrument::Option(o) => o.expiry(),
            Instrument::Future(f) => f.expiry(),
        }
    }

    pub fn asset_class(&self) -> AssetClass {
        match self {
            Instrument::Option(_) => AssetClass::Option,
            Instrument::Future(_) => AssetClass::Future,
        }
    }

    /// Recompute the fair value for the current tick
    pub fn reprice(&mut self, ctx: &PricingContext) -> PricingResult<Price> {
        match self {
            Instrument::Option(o) => o.reprice(ctx),
            Instrument::Future(f) => Ok(f.reprice(ctx)),
        }
    }

    /// Snapshot view of this instrument
    pub fn mark(&self) -> InstrumentMark {
        InstrumentMark {
            symbol: self.symbol().to_string(),
            asset_class: self.asset_class(),
            price: self.price(),
            quantity: self.quantity(),
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instrument::Option(o) => write!(
                f,
                "{} {} {} exp {}",
                o.symbol,
                o.strike,
                o.option_type,
                self.expiry()
            ),
            Instrument::Future(fut) => write!(f, "{} exp {}", fut.symbol, self.expiry()),
        }
    }
}

impl From<OptionContract> for Instrument {
    fn from(option: OptionContract) -> Self {
        Instrument::Option(option)
    }
}

impl From<FutureContract> for Instrument {
    fn from(future: FutureContract) -> Self {
        Instrument::Future(future)
    }
}
