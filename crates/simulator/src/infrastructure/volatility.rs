use mmsim_core::Volatility;
use mmsim_ports::VolatilityProvider;

/// Same volatility every tick, regardless of price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVolatility(pub Volatility);

impl ConstantVolatility {
    pub fn new(volatility: Volatility) -> Self {
        Self(volatility)
    }
}

impl VolatilityProvider for ConstantVolatility {
    fn volatility(&mut self, _current_price: f64) -> f64 {
        self.0
    }
}
