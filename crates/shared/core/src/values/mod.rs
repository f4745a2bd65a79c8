/// Price value (underlying mid, quotes and fair values)
pub type Price = f64;

/// Signed position size; positive is long, negative is short
pub type Quantity = i64;

/// Volatility, used both as the per-tick price shock and the pricing sigma
pub type Volatility = f64;

/// Symbol identifier for a tradeable instrument
pub type Symbol = String;
