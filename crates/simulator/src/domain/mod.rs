//! Domain layer: the instruments the maker carries and the book holding them

mod book;
mod instrument;

pub use book::Book;
pub use instrument::{FutureContract, Instrument, OptionContract, PricingContext};
