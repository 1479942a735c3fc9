//! Map canvas rendering.
//!
//! Draws the world outline and the marker layer on a ratatui canvas, and
//! converts between terminal cells and geographic coordinates for mouse
//! hit-testing.
//!
//! ## Coordinate mapping
//!
//! Longitude maps to x and latitude to y, linearly. The visible longitude
//! span halves with every zoom level, the way slippy-map tiles do; the
//! latitude span follows from the area's aspect ratio, counting a terminal
//! cell as twice as tall as it is wide.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::player::layer::MarkerLayer;
use crate::tui::theme::Theme;

/// Screen widths of 256px tiles visible at once; sets the span per zoom level.
const VIEW_TILES: f64 = 4.0;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 12;

/// Fraction of the visible span moved by one pan step.
const PAN_FRACTION: f64 = 0.1;

/// Terminal cells are roughly twice as tall as wide.
const CELL_ASPECT: f64 = 2.0;

/// Marker glyph, and the glyph for the marker with an open popup.
const MARKER_GLYPH: &str = "●";
const SELECTED_GLYPH: &str = "◉";

/// Map center and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_lat: 37.5,
            center_lon: -119.5,
            zoom: 6,
        }
    }
}

impl Viewport {
    pub fn new(center_lat: f64, center_lon: f64, zoom: u8) -> Self {
        Self {
            center_lat: center_lat.clamp(-90.0, 90.0),
            center_lon: center_lon.clamp(-180.0, 180.0),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Visible longitude span in degrees.
    pub fn lon_span(&self) -> f64 {
        (360.0 * VIEW_TILES / 2f64.powi(self.zoom as i32)).min(360.0)
    }

    /// Visible latitude span in degrees for an area.
    pub fn lat_span(&self, area: Rect) -> f64 {
        let aspect = if area.width > 0 {
            (area.height as f64 * CELL_ASPECT) / area.width as f64
        } else {
            1.0
        };
        self.lon_span() * aspect
    }

    /// Canvas `(x_bounds, y_bounds)` for an area.
    pub fn bounds(&self, area: Rect) -> ([f64; 2], [f64; 2]) {
        let half_lon = self.lon_span() / 2.0;
        let half_lat = self.lat_span(area) / 2.0;
        (
            [self.center_lon - half_lon, self.center_lon + half_lon],
            [self.center_lat - half_lat, self.center_lat + half_lat],
        )
    }

    /// Geographic `(lat, lon)` at the center of a terminal cell.
    pub fn cell_to_coord(&self, area: Rect, col: u16, row: u16) -> Option<(f64, f64)> {
        if area.width == 0
            || area.height == 0
            || col < area.x
            || col >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let ([x0, x1], [y0, y1]) = self.bounds(area);
        let fx = ((col - area.x) as f64 + 0.5) / area.width as f64;
        let fy = ((row - area.y) as f64 + 0.5) / area.height as f64;
        Some((y1 - fy * (y1 - y0), x0 + fx * (x1 - x0)))
    }

    /// Distance in degrees that a click may miss a marker by.
    pub fn hit_radius(&self, area: Rect) -> f64 {
        if area.width == 0 {
            return 0.0;
        }
        // One and a half cells
        1.5 * self.lon_span() / area.width as f64
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Pan by a number of steps in each direction (positive is north/east).
    pub fn pan(&mut self, north: i32, east: i32) {
        let step = self.lon_span() * PAN_FRACTION;
        self.center_lat = (self.center_lat + north as f64 * step).clamp(-90.0, 90.0);
        self.center_lon = (self.center_lon + east as f64 * step).clamp(-180.0, 180.0);
    }
}

/// Render the map with its markers. Returns the inner canvas area.
pub fn render_map(
    frame: &mut Frame,
    area: Rect,
    layer: &MarkerLayer,
    viewport: &Viewport,
    theme: &Theme,
) -> Rect {
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(layer.time_label().to_string(), theme.accent_bold_style()),
        Span::raw(" "),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(title);
    let inner = block.inner(area);
    let (x_bounds, y_bounds) = viewport.bounds(inner);
    let selected = layer.selected_index();
    let outline = theme.map_outline;

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: outline,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for (i, marker) in layer.markers().iter().enumerate() {
                let glyph = if selected == Some(i) {
                    SELECTED_GLYPH
                } else {
                    MARKER_GLYPH
                };
                ctx.print(
                    marker.lon,
                    marker.lat,
                    Span::styled(glyph, Style::default().fg(marker.color.color())),
                );
            }
        });

    frame.render_widget(canvas, area);
    inner
}

/// Render the popup of the selected marker in the top-right of the map.
pub fn render_popup(frame: &mut Frame, map_area: Rect, layer: &MarkerLayer, theme: &Theme) {
    let Some(marker) = layer.selected() else {
        return;
    };

    let mut lines = marker.label.lines();
    let mut text = Vec::new();
    if let Some(first) = lines.next() {
        text.push(Line::from(Span::styled(
            first.to_string(),
            theme.accent_bold_style(),
        )));
    }
    text.extend(lines.map(|l| Line::from(Span::styled(l.to_string(), theme.text_style()))));

    let content_width = marker
        .label
        .lines()
        .map(unicode_width::UnicodeWidthStr::width)
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 4).min(map_area.width);
    let height = (text.len() as u16 + 2).min(map_area.height);
    let popup = Rect::new(
        map_area.x + map_area.width.saturating_sub(width),
        map_area.y,
        width,
        height,
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(marker.color.color())),
        ),
        popup,
    );
}
