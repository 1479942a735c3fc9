//! Input handling for the native player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.
//! The event loop is the only subscriber; handlers are wired once.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::controller::PlaybackController;
use crate::player::layer::MarkerLayer;
use crate::player::state::{InputResult, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    controller: &mut PlaybackController<MarkerLayer>,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, controller, view, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, controller, view),
        Event::Resize(cols, rows) => {
            view.handle_resize(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
