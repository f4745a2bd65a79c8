//! Option Pricing
//!
//! Closed-form valuation used to reprice the option book every tick:
//!
//! - [`normal_cdf`]: standard normal cumulative distribution, via `erf`
//! - [`black_scholes`]: European call/put value from spot, strike, time,
//!   rate and volatility
//!
//! ## Discounting convention
//!
//! Both the spot leg and the strike leg are discounted by `exp(-r*T)`:
//!
//! ```text
//! call = S·e^(-rT)·N(d1) − K·e^(-rT)·N(d2)
//! put  = K·e^(-rT)·N(−d2) − S·e^(-rT)·N(−d1)
//! ```
//!
//! The textbook model leaves the spot leg undiscounted. Prices produced here
//! therefore satisfy `call − put = (S − K)·e^(-rT)` rather than
//! `S − K·e^(-rT)`. Existing PnL trajectories depend on this form.
//!
//! ## Usage
//!
//! ```rust
//! use mmsim_core::OptionType;
//! use mmsim_pricing::black_scholes;
//!
//! let call = black_scholes(100.0, 95.0, 0.5, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!(call > 0.0);
//! ```

mod black_scholes;
mod error;
mod normal;

pub use black_scholes::{BlackScholesInputs, black_scholes};
pub use error::{PricingError, PricingResult};
pub use normal::normal_cdf;
