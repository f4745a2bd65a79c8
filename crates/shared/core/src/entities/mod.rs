mod asset_class;
mod option_type;
mod pnl;
mod side;
mod trade;

pub use asset_class::AssetClass;
pub use option_type::OptionType;
pub use pnl::PnlAccumulator;
pub use side::Side;
pub use trade::TradeRecord;
