//! Records handed to reporters: one snapshot per tick and a summary at the
//! end of the run.

mod snapshot;
mod summary;

pub use snapshot::{InstrumentMark, TickSnapshot};
pub use summary::RunSummary;
