//! Headless agent simulation binary.
//!
//! ```bash
//! RUST_LOG=runtime=debug SIM_AUTOPILOT=true cargo run -p sim
//! ```

use anyhow::Result;
use sim::{SimConfig, Simulation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = SimConfig::from_env();
    tracing::info!(
        "Starting simulation: seed={} ticks={} dt={} enemies={} autopilot={}",
        config.seed,
        config.ticks,
        config.delta_time,
        config.enemies,
        config.autopilot
    );

    let mut simulation = Simulation::build(&config)?;
    let report = simulation.run(config.ticks);

    tracing::info!("Finished: {:?}", report);
    print!("{}", simulation.render());

    Ok(())
}

/// Logs to stderr so the rendered map on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
