//! Marker rendering for a single time step.
//!
//! Projects the records of one [`TimeStep`] onto a [`MapSurface`]: the
//! surface is cleared, one marker is added per record that has both
//! coordinates, and the time label is replaced.

use ratatui::style::Color;

use crate::dataset::{Record, TimeStep};

/// Score at or above which a node is high alert.
pub const HIGH_THRESHOLD: f64 = 0.9;
/// Score at or above which a node is mid alert.
pub const MID_THRESHOLD: f64 = 0.5;

/// Placeholder for missing values in popup labels.
pub const MISSING: &str = "n/a";

/// Fill color tiers for markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    /// No score
    Neutral,
    /// score >= 0.9
    High,
    /// 0.5 <= score < 0.9
    Mid,
    /// score < 0.5
    Low,
}

impl MarkerColor {
    /// All tiers in legend order.
    pub const ALL: [MarkerColor; 4] = [
        MarkerColor::High,
        MarkerColor::Mid,
        MarkerColor::Low,
        MarkerColor::Neutral,
    ];

    /// Fill color as a hex string.
    pub fn hex(&self) -> &'static str {
        match self {
            MarkerColor::Neutral => "#999999",
            MarkerColor::High => "#d73027",
            MarkerColor::Mid => "#fee08b",
            MarkerColor::Low => "#91cf60",
        }
    }

    /// Fill color for the terminal.
    pub fn color(&self) -> Color {
        match self {
            MarkerColor::Neutral => Color::Rgb(0x99, 0x99, 0x99),
            MarkerColor::High => Color::Rgb(0xd7, 0x30, 0x27),
            MarkerColor::Mid => Color::Rgb(0xfe, 0xe0, 0x8b),
            MarkerColor::Low => Color::Rgb(0x91, 0xcf, 0x60),
        }
    }

    /// Short legend label.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerColor::Neutral => "n/a",
            MarkerColor::High => ">=0.9",
            MarkerColor::Mid => ">=0.5",
            MarkerColor::Low => "<0.5",
        }
    }
}

/// Outline color shared by all markers.
pub const OUTLINE_COLOR: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Map a score to its color tier.
///
/// The missing-score branch is checked first. NaN fails both threshold
/// comparisons and ends up in the low tier.
pub fn color_for_score(score: Option<f64>) -> MarkerColor {
    match score {
        None => MarkerColor::Neutral,
        Some(s) if s >= HIGH_THRESHOLD => MarkerColor::High,
        Some(s) if s >= MID_THRESHOLD => MarkerColor::Mid,
        Some(_) => MarkerColor::Low,
    }
}

/// Format a number for display: integral values have no fractional part,
/// everything else uses the shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Format an optional number, falling back to `n/a`.
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), format_number)
}

/// Popup text for a record: node id, then price and score lines.
pub fn popup_label(record: &Record) -> String {
    format!(
        "{}\nPrice: {}\nScore: {}",
        record.node_id,
        format_optional(record.price),
        format_optional(record.score)
    )
}

/// One marker as placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub color: MarkerColor,
    pub node_id: String,
    pub label: String,
}

impl Marker {
    /// Build the marker for a record, or `None` if it lacks coordinates.
    pub fn from_record(record: &Record) -> Option<Self> {
        let (lat, lon) = record.position()?;
        Some(Self {
            lat,
            lon,
            color: color_for_score(record.score),
            node_id: record.node_id.clone(),
            label: popup_label(record),
        })
    }
}

/// Target of a render: a marker layer plus a time label.
pub trait MapSurface {
    /// Remove every marker currently on the layer.
    fn clear_markers(&mut self);
    /// Add one marker to the layer.
    fn add_marker(&mut self, marker: Marker);
    /// Replace the time label text.
    fn set_time_label(&mut self, label: &str);
}

/// Render one time step onto a surface.
///
/// Records without both coordinates are skipped; the rest are added in
/// sequence order. Never fails.
pub fn render_step<S: MapSurface + ?Sized>(step: &TimeStep, surface: &mut S) {
    surface.clear_markers();

    let mut skipped = 0usize;
    for record in &step.records {
        match Marker::from_record(record) {
            Some(marker) => surface.add_marker(marker),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(time = %step.time, skipped, "records without coordinates skipped");
    }

    surface.set_time_label(&step.time);
}
