//! Time-stepped nodal dataset.
//!
//! A dataset is an ordered, non-empty sequence of [`TimeStep`]s, each bundling
//! a display label with the geolocated [`Record`]s observed at that step.
//! It is loaded once at startup (see [`loader`]) and never mutated.

pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::{load_dataset, DatasetSource, LoadError};

/// One geolocated observation at a given time step.
///
/// Every numeric field is optional: `null` and an absent key are the same.
/// Records without both coordinates stay in the dataset but are never drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub node_id: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Record {
    /// Coordinates as `(lat, lon)` when both are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// One discrete point in the time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStep {
    /// Display label, shown verbatim
    pub time: String,
    pub records: Vec<Record>,
}

impl TimeStep {
    /// Number of records that carry both coordinates.
    pub fn renderable_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.position().is_some())
            .count()
    }
}

/// Validated, non-empty sequence of time steps.
///
/// The only way to build one outside this module is through the loader or
/// [`Dataset::new`], both of which reject an empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    steps: Vec<TimeStep>,
}

impl Dataset {
    /// Wrap a sequence of steps, rejecting an empty one.
    pub fn new(steps: Vec<TimeStep>) -> Result<Self, LoadError> {
        if steps.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Highest valid index (`len - 1`).
    pub fn max_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&TimeStep> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[TimeStep] {
        &self.steps
    }

    /// Total record count across all steps.
    pub fn record_count(&self) -> usize {
        self.steps.iter().map(|s| s.records.len()).sum()
    }
}
