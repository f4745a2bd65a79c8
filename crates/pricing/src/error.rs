use thiserror::Error;

/// Errors raised while valuing an option
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input is outside the model's domain (non-positive spot, strike,
    /// time or volatility, or a non-finite rate)
    #[error("Invalid pricing input: {0}")]
    InvalidInput(String),

    /// An intermediate or final value came out non-finite
    #[error("Arithmetic fault: {0}")]
    ArithmeticFault(String),
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;
