//! Rendering components for the native player.
//!
//! This module contains the marker renderer and all the UI rendering
//! functions for the player: map canvas, popup, slider, status bar and help
//! overlay.

pub mod help;
pub mod map;
pub mod markers;
pub mod slider;
pub mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use map::{render_map, render_popup, Viewport};
pub use markers::{
    color_for_score, format_optional, popup_label, render_step, MapSurface, Marker, MarkerColor,
};
pub use slider::{build_slider_chars, render_slider, slider_value_at};
pub use status::{build_status_line, render_separator_line, render_status_bar};

use crate::player::controller::PlaybackController;
use crate::player::layer::MarkerLayer;
use crate::player::state::ViewState;
use crate::tui::theme::Theme;

/// Number of chrome lines below the map (separator + slider + status bar).
pub const STATUS_LINES: u16 = 3;

/// Draw one full frame and record the map and slider areas in `view`.
///
/// The slider handle and the markers both come from the same controller
/// state within one frame.
pub fn draw(
    frame: &mut Frame,
    controller: &PlaybackController<MarkerLayer>,
    view: &mut ViewState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let layer = controller.surface();
    let state = controller.state();

    view.map_area = render_map(frame, chunks[0], layer, &view.viewport, theme);
    render_popup(frame, view.map_area, layer, theme);
    render_separator_line(frame, chunks[1], theme);
    view.slider_area = render_slider(
        frame,
        chunks[2],
        state.index,
        controller.dataset().max_index(),
        theme,
    );
    render_status_bar(
        frame,
        chunks[3],
        state,
        controller.dataset().len(),
        layer,
        theme,
    );

    if view.show_help {
        render_help(frame, frame.area(), theme);
    }
}
