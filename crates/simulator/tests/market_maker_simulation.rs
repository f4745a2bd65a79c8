//! Integration test: full market-making runs
//!
//! Tests the complete flow through the public API:
//! 1. Config is loaded and validated
//! 2. The underlying moves under an injected random source
//! 3. The book is repriced and quoted
//! 4. Trades are booked into options/futures PnL
//! 5. Snapshots and the final summary reach the reporter

use approx::assert_abs_diff_eq;
use mmsim::{
    ChannelReporter, ConstantVolatility, ExecutionEngine, ExecutionMode, FutureContract,
    Instrument, LogReporter, PricingContext, RecordingReporter, ReportEvent, RunState,
    ScriptedSource, SeededNormal, Simulation, SimulationConfig, SimulationError,
    load_config_from_str, load_default_config,
};
use mmsim_core::{AssetClass, OptionType, PnlAccumulator, Quote};
use mmsim_pricing::{PricingError, black_scholes};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn recording_run(
    config: SimulationConfig,
    draws: Vec<f64>,
) -> (mmsim_core::RunSummary, RecordingReporter) {
    let volatility = ConstantVolatility::new(config.volatility);
    let mut sim = Simulation::new(
        config,
        ScriptedSource::new(draws),
        volatility,
        RecordingReporter::new(),
    )
    .unwrap();
    let summary = sim.run().unwrap();
    (summary, sim.into_reporter())
}

/// One tick, flat AAPL call, zero price change
#[test]
fn test_single_tick_out_of_the_money_call() {
    init_logging();

    let config = load_config_from_str(
        r#"{
            "initial_price": 100.0,
            "spread": 1.0,
            "risk_free_rate": 0.05,
            "volatility": 0.1,
            "num_ticks": 1,
            "options": [ { "symbol": "AAPL", "strike": 120.0, "expiry": 0.25, "quantity": 0 } ]
        }"#,
    )
    .unwrap();

    let (summary, reporter) = recording_run(config, vec![0.0]);

    assert_eq!(reporter.snapshots.len(), 1);
    let snapshot = &reporter.snapshots[0];
    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.mid, 100.0);
    assert_eq!(snapshot.bid, 99.5);
    assert_eq!(snapshot.ask, 100.5);

    let expected = black_scholes(100.0, 120.0, 0.25, 0.05, 0.1, OptionType::Call).unwrap();
    let aapl = snapshot.mark("AAPL").unwrap();
    assert_eq!(aapl.price, expected);
    assert!(aapl.price.abs() < 0.01, "far out of the money, got {}", aapl.price);

    // Flat position: both legs trade zero size
    assert_eq!(summary.pnl, PnlAccumulator::default());
    assert_eq!(summary.ticks, 1);
    assert_eq!(reporter.summary, Some(summary));
}

/// Same configuration and same scripted draws give identical output
#[test]
fn test_runs_are_deterministic_under_scripted_source() {
    init_logging();

    let mut config = load_default_config()
        .unwrap()
        .with_execution(ExecutionMode::InventoryDirected);
    config.options[1].quantity = 3;
    config.futures[2].quantity = -4;

    let draws = vec![0.07, -0.12, 0.031, 0.0, -0.044, 0.2];

    let (summary_a, reporter_a) = recording_run(config.clone(), draws.clone());
    let (summary_b, reporter_b) = recording_run(config, draws);

    let json_a = serde_json::to_string(&reporter_a.snapshots).unwrap();
    let json_b = serde_json::to_string(&reporter_b.snapshots).unwrap();
    assert_eq!(json_a, json_b);
    assert_eq!(reporter_a.trades, reporter_b.trades);
    assert_eq!(summary_a.pnl, summary_b.pnl);
    assert_eq!(summary_a.pnl.options.to_bits(), summary_b.pnl.options.to_bits());
    assert_eq!(summary_a.pnl.futures.to_bits(), summary_b.pnl.futures.to_bits());
}

#[test]
fn test_seeded_runs_reproduce() {
    let config = load_default_config().unwrap().with_seed(99);

    let run = |config: SimulationConfig| {
        let random = SeededNormal::from_seed_option(config.seed);
        let volatility = ConstantVolatility::new(config.volatility);
        let mut sim = Simulation::new(config, random, volatility, RecordingReporter::new()).unwrap();
        sim.run().unwrap();
        sim.into_reporter()
    };

    let a = run(config.clone());
    let b = run(config);
    assert_eq!(a.snapshots, b.snapshots);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn test_default_config_runs_ten_ticks() {
    init_logging();

    let config = load_default_config().unwrap();
    let (summary, reporter) = recording_run(config, vec![0.05, -0.03]);

    assert_eq!(summary.ticks, 10);
    assert_eq!(reporter.snapshots.len(), 10);
    // 8 instruments, both legs, every tick
    assert_eq!(summary.trades, 160);
    // All positions flat in the default book
    assert_eq!(summary.pnl.total(), 0.0);

    for snapshot in &reporter.snapshots {
        assert_abs_diff_eq!(snapshot.ask - snapshot.bid, 1.0, epsilon = 1e-9);
        for mark in snapshot.instruments.iter().filter(|m| m.asset_class == AssetClass::Future) {
            assert_eq!(mark.price, snapshot.mid);
        }
    }
}

#[test]
fn test_inventory_policy_through_engine() {
    let engine = ExecutionEngine::from_mode(ExecutionMode::InventoryDirected);
    let quote = Quote::new(99.0, 101.0);
    let ctx = PricingContext {
        spot: 100.0,
        rate: 0.05,
        volatility: 0.1,
    };

    let contribution = |quantity: i64| {
        let mut future: Instrument = FutureContract::new("GC", 1.0, quantity).unwrap().into();
        future.reprice(&ctx).unwrap();
        engine
            .execute(1, &future, &quote, PnlAccumulator::new())
            .pnl
            .total()
    };

    assert_eq!(contribution(5), 5.0);
    assert_eq!(contribution(-3), 3.0);
    assert_eq!(contribution(0), 0.0);
}

#[test]
fn test_policies_diverge_on_same_path() {
    let base = SimulationConfig {
        num_ticks: 4,
        ..Default::default()
    }
    .with_future("ES", 1.0, 2)
    .with_option("MSFT", 95.0, 0.75, -1);
    let draws = vec![0.1, -0.2, 0.05];

    let (unconditional, _) = recording_run(base.clone(), draws.clone());
    let (inventory, _) = recording_run(
        base.with_execution(ExecutionMode::InventoryDirected),
        draws,
    );

    assert_eq!(unconditional.final_price, inventory.final_price);
    assert_ne!(unconditional.pnl, inventory.pnl);
    // Futures track spot, so inventory selling 2 into the ask earns half the spread each tick
    assert_abs_diff_eq!(inventory.pnl.futures, 4.0 * 0.5 * 2.0, epsilon = 1e-9);
}

#[test]
fn test_expired_option_cannot_be_configured() {
    let result = load_config_from_str(
        r#"{ "options": [ { "symbol": "AAPL", "strike": 120.0, "expiry": 0.0 } ] }"#,
    );
    assert!(result.is_err());

    let priced = black_scholes(100.0, 120.0, 0.0, 0.05, 0.1, OptionType::Call);
    assert!(matches!(priced, Err(PricingError::InvalidInput(_))));
}

#[test]
fn test_crash_aborts_with_tick_and_symbol() {
    init_logging();

    let config = SimulationConfig::default().with_option("AMZN", 3000.0, 1.0, 1);
    let volatility = ConstantVolatility::new(config.volatility);
    let mut sim = Simulation::new(
        config,
        ScriptedSource::new(vec![-40.0, -40.0, -40.0]),
        volatility,
        RecordingReporter::new(),
    )
    .unwrap();

    let err = sim.run().unwrap_err();
    assert!(
        matches!(&err, SimulationError::Pricing { tick: 3, symbol, .. } if symbol == "AMZN"),
        "{err}"
    );
    assert_eq!(sim.state(), RunState::Finished);
    assert_eq!(sim.reporter().snapshots.len(), 2);
}

#[tokio::test]
async fn test_channel_reporter_feeds_async_consumer() {
    init_logging();

    let config = load_default_config().unwrap().with_seed(5);
    let (reporter, mut events) = ChannelReporter::channel(1024);

    let consumer = tokio::spawn(async move {
        let mut log_reporter = LogReporter::without_trades();
        let mut recorder = RecordingReporter::new();
        while let Some(event) = events.recv().await {
            event.dispatch(&mut log_reporter).unwrap();
            event.dispatch(&mut recorder).unwrap();
            if matches!(event, ReportEvent::Finished(_)) {
                break;
            }
        }
        recorder
    });

    let summary = tokio::task::spawn_blocking(move || {
        let random = SeededNormal::from_seed_option(config.seed);
        let volatility = ConstantVolatility::new(config.volatility);
        let mut sim = Simulation::new(config, random, volatility, reporter).unwrap();
        sim.run().unwrap()
    })
    .await
    .unwrap();

    let recorder = consumer.await.unwrap();
    assert_eq!(summary.report_failures, 0);
    assert_eq!(recorder.snapshots.len(), 10);
    assert_eq!(recorder.trades.len() as u64, summary.trades);
    assert_eq!(recorder.summary, Some(summary));
}

#[test]
fn test_channel_reporter_never_blocks_the_run() {
    let config = load_default_config().unwrap();
    let (reporter, events) = ChannelReporter::channel(1);
    let volatility = ConstantVolatility::new(config.volatility);

    let mut sim = Simulation::new(config, ScriptedSource::zeros(), volatility, reporter).unwrap();
    let summary = sim.run().unwrap();

    // Nobody reads: only the first event fits, everything else is dropped
    assert_eq!(summary.ticks, 10);
    assert_eq!(summary.report_failures, 160 + 10 + 1 - 1);
    assert_eq!(sim.reporter().dropped(), summary.report_failures);
    drop(events);
}
