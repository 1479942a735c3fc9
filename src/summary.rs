//! Per-step dataset summary for `lmpmap inspect`.
//!
//! Each step is run through the same renderer the player uses, so the
//! counts are exactly what the map would show.

use crate::dataset::{Dataset, TimeStep};
use crate::player::layer::MarkerLayer;
use crate::player::render::markers::MarkerColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    pub time: String,
    /// Records in the step
    pub records: usize,
    /// Records that become markers
    pub drawn: usize,
    /// Marker counts in `MarkerColor::ALL` order
    pub tiers: [usize; 4],
}

impl StepSummary {
    pub fn from_step(step: &TimeStep) -> Self {
        let layer = MarkerLayer::from_step(step);
        let counts = layer.tier_counts();
        let tiers = MarkerColor::ALL.map(|tier| counts.get(&tier).copied().unwrap_or(0));
        Self {
            time: layer.time_label().to_string(),
            records: step.records.len(),
            drawn: layer.len(),
            tiers,
        }
    }

    /// Records left off the map for missing coordinates.
    pub fn skipped(&self) -> usize {
        self.records - self.drawn
    }
}

pub fn summarize(dataset: &Dataset) -> Vec<StepSummary> {
    dataset.steps().iter().map(StepSummary::from_step).collect()
}
