use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function
///
/// `N(x) = 0.5 * (1 + erf(x / sqrt(2)))`. Total over finite inputs; the
/// result is always in `[0, 1]`.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}
