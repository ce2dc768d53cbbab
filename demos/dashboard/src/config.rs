//! Config file loading and CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use fw_core::FleetConfig;

use crate::cli::Cli;

/// Parse a TOML document into a validated [`FleetConfig`].  Missing keys keep
/// their defaults.
pub fn parse_config(text: &str) -> Result<FleetConfig> {
    let config: FleetConfig = toml::from_str(text).context("invalid fleet config")?;
    config.validate()?;
    Ok(config)
}

/// Load `path` if given, otherwise start from defaults.
pub fn load_config(path: Option<&Path>) -> Result<FleetConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_config(&text).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(FleetConfig::default()),
    }
}

/// Apply command-line overrides on top of a loaded config and re-validate.
pub fn apply_overrides(mut config: FleetConfig, cli: &Cli) -> Result<FleetConfig> {
    if let Some(ms) = cli.tick_ms {
        config.tick_interval_ms = ms;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.detect {
        config.cluster.enabled = true;
    }
    config.validate()?;
    Ok(config)
}
