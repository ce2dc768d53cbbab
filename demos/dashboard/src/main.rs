//! `fleet-dashboard` runs the demo fleet on a background ticker, then
//! applies any operator commands and prints the dashboard.

mod cli;
mod config;
mod render;


use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use fw_detect::detect_clusters;
use fw_fleet::{demo_fleet, JitterSource};
use fw_sim::{shared, FleetSim, FleetTicker, TracingObserver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{apply_overrides, load_config};
use crate::render::{render_clusters, render_dashboard, ListView};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = apply_overrides(load_config(cli.config.as_deref())?, &cli)?;
    info!(
        tick_ms = config.tick_interval_ms,
        seed = config.seed,
        detect = config.cluster.enabled,
        "configuration loaded"
    );

    let source = JitterSource::from_config(&config);
    let cluster_config = config.cluster.clone();
    let sim = FleetSim::new(config, demo_fleet(Utc::now())?, source)?;
    let fleet = shared(sim);

    let mut ticker = FleetTicker::new();
    ticker.start(fleet.clone(), TracingObserver)?;
    tokio::time::sleep(Duration::from_secs(cli.seconds)).await;
    ticker.stop();

    let snapshot = {
        let mut sim = fleet
            .lock()
            .map_err(|_| anyhow::anyhow!("fleet state lock poisoned"))?;
        let mut observer = TracingObserver;
        for &bus in &cli.reroute {
            if let Err(e) = sim.reroute_bus(bus, &mut observer) {
                warn!(error = %e, "reroute skipped");
            }
        }
        for &alert in &cli.resolve {
            if let Err(e) = sim.resolve_alert(alert, &mut observer) {
                warn!(error = %e, "resolve skipped");
            }
        }
        sim.snapshot()
    };

    let view = ListView { query: &cli.query, key: cli.sort, order: cli.order };
    print!("{}", render_dashboard(&snapshot, &view));

    let report = detect_clusters(&snapshot.buses, &cluster_config).context("cluster analysis")?;
    print!("{}", render_clusters(&report));
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fw_sim=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
