//! In-memory marker layer.
//!
//! The production [`MapSurface`]: holds the markers of the current step, the
//! time label, and the marker whose popup is open. Clearing the layer closes
//! the popup, since the marker it belonged to is gone.

use std::collections::HashMap;

use crate::dataset::TimeStep;
use crate::player::render::markers::{render_step, MapSurface, Marker, MarkerColor};

#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    time_label: String,
    selected: Option<usize>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a step into a fresh layer.
    pub fn from_step(step: &TimeStep) -> Self {
        let mut layer = Self::new();
        render_step(step, &mut layer);
        layer
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// Marker with an open popup, if any.
    pub fn selected(&self) -> Option<&Marker> {
        self.selected.and_then(|i| self.markers.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Open the popup of the marker at `index`.
    pub fn select(&mut self, index: usize) {
        if index < self.markers.len() {
            self.selected = Some(index);
        }
    }

    pub fn close_popup(&mut self) {
        self.selected = None;
    }

    /// Move the popup to the next marker, wrapping around.
    pub fn select_next(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.markers.len(),
            None => 0,
        });
    }

    /// Move the popup to the previous marker, wrapping around.
    pub fn select_prev(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let last = self.markers.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Index of the marker closest to `(lat, lon)` within `max_distance`
    /// degrees (planar distance).
    pub fn nearest(&self, lat: f64, lon: f64, max_distance: f64) -> Option<usize> {
        let max_sq = max_distance * max_distance;
        self.markers
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let d_lat = m.lat - lat;
                let d_lon = m.lon - lon;
                (i, d_lat * d_lat + d_lon * d_lon)
            })
            .filter(|&(_, d)| d <= max_sq)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Marker count per color tier.
    pub fn tier_counts(&self) -> HashMap<MarkerColor, usize> {
        let mut counts = HashMap::new();
        for marker in &self.markers {
            *counts.entry(marker.color).or_insert(0) += 1;
        }
        counts
    }
}

impl MapSurface for MarkerLayer {
    fn clear_markers(&mut self) {
        self.markers.clear();
        self.selected = None;
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn set_time_label(&mut self, label: &str) {
        self.time_label = label.to_string();
    }
}
