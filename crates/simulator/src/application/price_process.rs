//! Price Process
//!
//! Arithmetic random walk for the underlying: each tick adds one normal draw
//! with standard deviation equal to the tick's volatility.

use mmsim_core::{Price, Volatility};
use mmsim_ports::RandomSource;

/// Next mid price: `current + N(0, volatility)`
///
/// No bounds are enforced; a large negative draw can take the price to zero
/// or below, in which case the next option repricing fails.
pub fn next_price<R>(current: Price, volatility: Volatility, random: &mut R) -> Price
where
    R: RandomSource + ?Sized,
{
    current + random.sample(0.0, volatility)
}
