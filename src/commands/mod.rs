//! Subcommand handlers

pub mod config;
pub mod inspect;
pub mod play;

use anyhow::{Context, Result};

use lmpmap::dataset::{load_dataset, Dataset, DatasetSource};
use lmpmap::Config;

/// Pick the dataset location: the argument if given, else the config.
pub fn resolve_source(arg: Option<&str>, config: &Config) -> DatasetSource {
    DatasetSource::parse(arg.unwrap_or(&config.data.source))
}

/// Load the dataset, wrapping any failure in the user-facing message.
///
/// This is the only place a dataset is loaded; on failure nothing after it
/// runs.
pub fn load(source: &DatasetSource) -> Result<Dataset> {
    load_dataset(source).with_context(|| format!("No data found ({})", source))
}
