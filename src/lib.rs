//! lmpmap - terminal map player for time-stepped nodal price and score data
//!
//! Loads a JSON array of time steps once, then lets the user scrub through
//! them with a slider or auto-play them, re-rendering a colored marker layer
//! on every step change.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod player;
pub mod summary;
pub mod tui;

pub use config::Config;
pub use dataset::{load_dataset, Dataset, DatasetSource, LoadError, Record, TimeStep};
pub use player::{MarkerLayer, PlaybackController};
