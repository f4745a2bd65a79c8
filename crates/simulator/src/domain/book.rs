use mmsim_core::InstrumentMark;

use super::Instrument;

/// The maker's book, partitioned into options and futures
///
/// Iteration always yields options first, then futures. The option side is
/// re-sorted by price every tick for readable output; pricing and PnL do not
/// depend on the order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    options: Vec<Instrument>,
    futures: Vec<Instrument>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instrument to its partition
    pub fn add(&mut self, instrument: impl Into<Instrument>) {
        let instrument = instrument.into();
        match instrument {
            Instrument::Option(_) => self.options.push(instrument),
            Instrument::Future(_) => self.futures.push(instrument),
        }
    }

    pub fn options(&self) -> &[Instrument] {
        &self.options
    }

    pub fn futures(&self) -> &[Instrument] {
        &self.futures
    }

    /// Options, then futures
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.options.iter().chain(self.futures.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instrument> {
        self.options.iter_mut().chain(self.futures.iter_mut())
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.iter().find(|i| i.symbol() == symbol)
    }

    pub fn len(&self) -> usize {
        self.options.len() + self.futures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stable sort of the option side by fair value, ascending
    pub fn sort_options_by_price(&mut self) {
        self.options.sort_by(|a, b| a.price().total_cmp(&b.price()));
    }

    /// Marks for every instrument in book order
    pub fn marks(&self) -> Vec<InstrumentMark> {
        self.iter().map(Instrument::mark).collect()
    }
}

impl FromIterator<Instrument> for Book {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        let mut book = Book::new();
        for instrument in iter {
            book.add(instrument);
        }
        book
    }
}
