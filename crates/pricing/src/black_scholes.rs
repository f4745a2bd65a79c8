use mmsim_core::OptionType;

use crate::error::{PricingError, PricingResult};
use crate::normal::normal_cdf;

/// Inputs to a single Black-Scholes valuation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesInputs {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Volatility of the underlying
    pub volatility: f64,
}

impl BlackScholesInputs {
    pub fn new(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        }
    }

    /// Reject inputs outside the model's domain
    pub fn validate(&self) -> PricingResult<()> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_positive("time to expiry", self.time_to_expiry)?;
        check_positive("volatility", self.volatility)?;
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        Ok(())
    }

    /// Compute `(d1, d2)`
    pub fn d1_d2(&self) -> PricingResult<(f64, f64)> {
        self.validate()?;

        let vol_sqrt_t = self.volatility * self.time_to_expiry.sqrt();
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * self.time_to_expiry)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        if !d1.is_finite() || !d2.is_finite() {
            return Err(PricingError::ArithmeticFault(format!(
                "d1={}, d2={} for {:?}",
                d1, d2, self
            )));
        }
        Ok((d1, d2))
    }

    /// Value the option with both legs discounted by `exp(-r*T)`
    pub fn price(&self, option_type: OptionType) -> PricingResult<f64> {
        let (d1, d2) = self.d1_d2()?;
        let discount = (-self.rate * self.time_to_expiry).exp();

        let value = match option_type {
            OptionType::Call => {
                self.spot * discount * normal_cdf(d1) - self.strike * discount * normal_cdf(d2)
            }
            OptionType::Put => {
                self.strike * discount * normal_cdf(-d2) - self.spot * discount * normal_cdf(-d1)
            }
        };

        if !value.is_finite() {
            return Err(PricingError::ArithmeticFault(format!(
                "non-finite {} value for {:?}",
                option_type, self
            )));
        }
        Ok(value)
    }
}

fn check_positive(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

/// Black-Scholes value of a European option
///
/// `spot`, `strike`, `time_to_expiry` and `volatility` must be positive,
/// otherwise [`PricingError::InvalidInput`] is returned.
pub fn black_scholes(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    BlackScholesInputs::new(spot, strike, time_to_expiry, rate, volatility).price(option_type)
}
