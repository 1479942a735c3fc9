//! Player state management
//!
//! Contains the playback state owned by the controller and the view state
//! owned by the terminal front end, plus shared types used across player
//! modules.

use ratatui::layout::Rect;

use crate::player::render::map::Viewport;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Current time index and play/pause flag.
///
/// Only [`PlaybackController`](crate::player::PlaybackController) mutates
/// this; everything else gets a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    /// Index of the current time step, always in `[0, len - 1]`
    pub index: usize,
    /// Whether auto-advance is running
    pub playing: bool,
}

impl PlaybackState {
    /// Glyph for the play/pause control: what pressing it would do.
    pub fn play_label(&self) -> &'static str {
        if self.playing {
            "⏸"
        } else {
            "▶"
        }
    }
}

/// Front-end state that does not affect playback.
///
/// Layout rectangles are recorded at draw time so mouse events can be
/// mapped back onto the slider and the map.
#[derive(Debug)]
pub struct ViewState {
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Map viewport (center and zoom)
    pub viewport: Viewport,
    /// Viewport to return to on recenter
    pub home: Viewport,
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Inner area of the map canvas from the last frame
    pub map_area: Rect,
    /// Slider bar area from the last frame
    pub slider_area: Rect,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    pub fn new(viewport: Viewport, term_cols: u16, term_rows: u16) -> Self {
        Self {
            show_help: false,
            viewport,
            home: viewport,
            term_cols,
            term_rows,
            map_area: Rect::default(),
            slider_area: Rect::default(),
            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.term_cols = cols;
        self.term_rows = rows;
        self.needs_render = true;
    }

    /// Reset the map to the initial center and zoom.
    pub fn recenter(&mut self) {
        self.viewport = self.home;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
