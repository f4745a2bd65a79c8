use env_logger::Env;
use log::{info, warn};
use mmsim::{
    ChannelReporter, ConstantVolatility, LogReporter, SeededNormal, Simulation, load_config,
    load_default_config,
};
use mmsim_core::AssetClass;

/// Capacity of the reporting channel; events beyond it are dropped
const REPORT_BUFFER: usize = 4096;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            load_config(&path)?
        }
        None => load_default_config()?,
    };

    let (reporter, mut events) = ChannelReporter::channel(REPORT_BUFFER);

    let printer = tokio::spawn(async move {
        let mut log_reporter = LogReporter::new();
        while let Some(event) = events.recv().await {
            if let Err(err) = event.dispatch(&mut log_reporter) {
                warn!("Failed to report event: {}", err);
            }
        }
    });

    let summary = tokio::task::spawn_blocking(move || {
        let random = SeededNormal::from_seed_option(config.seed);
        let volatility = ConstantVolatility::new(config.volatility);
        let mut simulation = Simulation::new(config, random, volatility, reporter)?;
        simulation.run()
    })
    .await??;

    // The simulation (and its sender) is gone, so the printer drains and exits
    printer.await?;

    for asset_class in [AssetClass::Option, AssetClass::Future] {
        info!("{} PnL: {:.4}", asset_class, summary.pnl.for_class(asset_class));
    }
    if summary.report_failures > 0 {
        warn!("{} report events were dropped", summary.report_failures);
    }

    Ok(())
}
