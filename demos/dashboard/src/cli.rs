use std::path::PathBuf;

use clap::Parser;
use fw_core::{AlertId, BusId};
use fw_view::{SortKey, SortOrder};

/// Run the demo bus fleet and print the operator dashboard.
#[derive(Parser, Debug)]
#[command(name = "fleet-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(short, long, env = "FLEET_CONFIG")]
    pub config: Option<PathBuf>,

    /// How long to let the ticker run before printing, in seconds
    #[arg(short, long, default_value_t = 5)]
    pub seconds: u64,

    /// Override `tick_interval_ms`
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Override the telemetry seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable clustering detection after every tick
    #[arg(long)]
    pub detect: bool,

    /// Filter buses by id or route (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Sort column: id, route, status
    #[arg(long, default_value = "id")]
    pub sort: SortKey,

    /// Sort direction: asc, desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,

    /// Reroute a bus before printing, e.g. `BUS-1003` (repeatable)
    #[arg(long)]
    pub reroute: Vec<BusId>,

    /// Resolve an alert before printing, e.g. `ALERT-001` (repeatable)
    #[arg(long)]
    pub resolve: Vec<AlertId>,
}
