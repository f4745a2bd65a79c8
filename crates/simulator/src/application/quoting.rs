use mmsim_core::{Price, Quote};

/// Symmetric quote around `mid`: `bid = mid - spread/2`, `ask = mid + spread/2`
pub fn quote(mid: Price, spread: f64) -> Quote {
    let half_spread = spread / 2.0;
    Quote::new(mid - half_spread, mid + half_spread)
}
