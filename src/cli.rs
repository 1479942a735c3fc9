//! Command line interface definitions.

use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build date and, for dev builds, the git SHA.
pub fn version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let date = env!("LMPMAP_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) => {
                let short = &sha[..sha.len().min(7)];
                format!("{} ({} {})", env!("CARGO_PKG_VERSION"), short, date)
            }
            None => format!("{} ({})", env!("CARGO_PKG_VERSION"), date),
        }
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "lmpmap",
    version = version_string(),
    about = "Play time-stepped nodal price and score data on a terminal map",
    long_about = "Play time-stepped nodal price and score data on a terminal map.\n\n\
        The dataset is a JSON array of {time, records} objects, where each record\n\
        carries node_id, lat, lon, price and score. Markers are colored by score:\n\
        red >= 0.9, amber >= 0.5, green below, gray when missing."
)]
pub struct Cli {
    /// Write debug logs to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive map player
    Play(PlayArgs),
    /// Print a per-step summary of a dataset
    Inspect(InspectArgs),
    /// Show or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Dataset file path or http(s) URL (defaults to the configured source)
    pub source: Option<String>,

    /// Auto-advance period in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Initial map center as LAT,LON
    #[arg(long, value_name = "LAT,LON", value_parser = parse_center, allow_hyphen_values = true)]
    pub center: Option<(f64, f64)>,

    /// Initial zoom level (1-12)
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Dataset file path or http(s) URL (defaults to the configured source)
    pub source: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

/// Parse `LAT,LON` into a coordinate pair.
pub fn parse_center(value: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{}'", value))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("center out of range: {},{}", lat, lon));
    }
    Ok((lat, lon))
}
