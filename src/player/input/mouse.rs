//! Mouse input handling for the native player.
//!
//! - Left click or drag on the slider bar sets the index
//! - Left click on the map opens the popup of the nearest marker
//! - Scroll wheel over the map zooms

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::controller::PlaybackController;
use crate::player::layer::MarkerLayer;
use crate::player::render::slider::slider_value_at;
use crate::player::state::{InputResult, ViewState};

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    controller: &mut PlaybackController<MarkerLayer>,
    view: &mut ViewState,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
            if mouse.row == view.slider_area.y =>
        {
            handle_slider_input(mouse.column, controller, view);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_map_click(mouse.column, mouse.row, controller, view);
        }
        MouseEventKind::ScrollUp if in_map(mouse, view) => {
            view.viewport.zoom_in();
            view.needs_render = true;
        }
        MouseEventKind::ScrollDown if in_map(mouse, view) => {
            view.viewport.zoom_out();
            view.needs_render = true;
        }
        _ => {}
    }

    InputResult::Continue
}

fn in_map(mouse: MouseEvent, view: &ViewState) -> bool {
    view.viewport
        .cell_to_coord(view.map_area, mouse.column, mouse.row)
        .is_some()
}

/// Slider input fires only when the value actually changes, like a range
/// input's `input` event.
fn handle_slider_input(
    column: u16,
    controller: &mut PlaybackController<MarkerLayer>,
    view: &mut ViewState,
) {
    let area = view.slider_area;
    let max_index = controller.dataset().max_index();
    if let Some(value) = slider_value_at(column, area.x, area.width, max_index) {
        if value != controller.index() {
            controller.set_index(value);
            view.needs_render = true;
        }
    }
}

fn handle_map_click(
    column: u16,
    row: u16,
    controller: &mut PlaybackController<MarkerLayer>,
    view: &mut ViewState,
) {
    let Some((lat, lon)) = view.viewport.cell_to_coord(view.map_area, column, row) else {
        return;
    };
    let radius = view.viewport.hit_radius(view.map_area);
    let layer = controller.surface_mut();
    match layer.nearest(lat, lon, radius) {
        Some(i) => layer.select(i),
        None => layer.close_popup(),
    }
    view.needs_render = true;
}
