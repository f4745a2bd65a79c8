//! Market Maker Simulator Ports
//!
//! Port definitions (traits) for the collaborators the simulation core talks to.
//! These define the boundaries between the core and whatever supplies
//! randomness, volatility estimates, or consumes the output.

mod error;
mod random;
mod reporter;
mod volatility;

pub use error::{ReportError, ReportResult};
pub use random::RandomSource;
pub use reporter::Reporter;
pub use volatility::VolatilityProvider;
