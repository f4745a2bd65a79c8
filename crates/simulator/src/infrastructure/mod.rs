//! Infrastructure Layer
//!
//! Implementations of ports for the simulator, plus configuration loading.

pub mod config;
mod random;
mod reporters;
mod volatility;

pub use config::{
    FutureConfig, OptionConfig, SimulationConfig, load_config, load_config_from_str,
    load_default_config,
};
pub use random::{ScriptedSource, SeededNormal};
pub use reporters::{ChannelReporter, LogReporter, RecordingReporter, ReportEvent};
pub use volatility::ConstantVolatility;
