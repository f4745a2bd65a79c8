/// Port for the volatility used each tick
///
/// The core only asks for a number keyed on the current underlying price; a
/// constant, a statistical estimator and a learned predictor all fit here.
/// Any `FnMut(f64) -> f64` closure is a provider.
pub trait VolatilityProvider {
    /// Volatility to use for the tick starting at `current_price`
    fn volatility(&mut self, current_price: f64) -> f64;
}

impl<F> VolatilityProvider for F
where
    F: FnMut(f64) -> f64,
{
    fn volatility(&mut self, current_price: f64) -> f64 {
        self(current_price)
    }
}
