//! Keyboard input handling for the native player.
//!
//! Handles all keyboard shortcuts: play/pause, slider steps, map navigation,
//! popup selection, help and quit.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::controller::PlaybackController;
use crate::player::layer::MarkerLayer;
use crate::player::state::{InputResult, ViewState};

/// Handle a keyboard event.
///
/// Updates controller or view state and returns a control flow signal.
pub fn handle_key_event(
    key: KeyEvent,
    controller: &mut PlaybackController<MarkerLayer>,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    // Release/repeat events arrive on some platforms; act on presses only
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.show_help = false;
        view.needs_render = true;
        return InputResult::Continue;
    }

    let result = match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => {
            if controller.surface().selected().is_some() {
                controller.surface_mut().close_popup();
                InputResult::Continue
            } else {
                InputResult::Quit
            }
        }

        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }

        // === Playback ===
        KeyCode::Char(' ') => {
            controller.toggle_play(now);
            InputResult::Continue
        }

        // === Slider ===
        KeyCode::Left => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                controller.jump(false);
            } else {
                controller.step_by(-1);
            }
            InputResult::Continue
        }
        KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                controller.jump(true);
            } else {
                controller.step_by(1);
            }
            InputResult::Continue
        }
        KeyCode::Home => {
            controller.jump_to_start();
            InputResult::Continue
        }
        KeyCode::End => {
            controller.jump_to_end();
            InputResult::Continue
        }

        // === Popups ===
        KeyCode::Tab => {
            controller.surface_mut().select_next();
            InputResult::Continue
        }
        KeyCode::BackTab => {
            controller.surface_mut().select_prev();
            InputResult::Continue
        }

        // === Map ===
        KeyCode::Char('+') | KeyCode::Char('=') => {
            view.viewport.zoom_in();
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            view.viewport.zoom_out();
            InputResult::Continue
        }
        KeyCode::Char('w') => {
            view.viewport.pan(1, 0);
            InputResult::Continue
        }
        KeyCode::Char('s') => {
            view.viewport.pan(-1, 0);
            InputResult::Continue
        }
        KeyCode::Char('a') => {
            view.viewport.pan(0, -1);
            InputResult::Continue
        }
        KeyCode::Char('d') => {
            view.viewport.pan(0, 1);
            InputResult::Continue
        }
        KeyCode::Char('c') => {
            view.recenter();
            InputResult::Continue
        }

        _ => return InputResult::Continue,
    };

    view.needs_render = true;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Record, TimeStep};
    use crate::player::render::map::Viewport;

    fn setup(len: usize) -> (PlaybackController<MarkerLayer>, ViewState) {
        let steps = (0..len)
            .map(|i| TimeStep {
                time: format!("t{}", i),
                records: vec![
                    Record {
                        node_id: "A".to_string(),
                        lat: Some(37.0),
                        lon: Some(-120.0),
                        price: Some(30.0),
                        score: Some(0.2),
                    },
                    Record {
                        node_id: "B".to_string(),
                        lat: Some(38.0),
                        lon: Some(-121.0),
                        price: None,
                        score: None,
                    },
                ],
            })
            .collect();
        let controller = PlaybackController::new(Dataset::new(steps).unwrap(), MarkerLayer::new());
        (controller, ViewState::new(Viewport::default(), 80, 24))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_playback() {
        let (mut c, mut view) = setup(3);
        let now = Instant::now();
        handle_key_event(press(KeyCode::Char(' ')), &mut c, &mut view, now);
        assert!(c.is_playing());
        handle_key_event(press(KeyCode::Char(' ')), &mut c, &mut view, now);
        assert!(!c.is_playing());
        assert!(!c.has_active_timer());
    }

    #[test]
    fn arrows_step_the_slider() {
        let (mut c, mut view) = setup(3);
        let now = Instant::now();
        handle_key_event(press(KeyCode::Right), &mut c, &mut view, now);
        assert_eq!(c.index(), 1);
        assert_eq!(c.surface().time_label(), "t1");
        handle_key_event(press(KeyCode::Left), &mut c, &mut view, now);
        assert_eq!(c.index(), 0);
        handle_key_event(press(KeyCode::End), &mut c, &mut view, now);
        assert_eq!(c.index(), 2);
        handle_key_event(press(KeyCode::Home), &mut c, &mut view, now);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn shift_arrow_jumps() {
        let (mut c, mut view) = setup(30);
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        handle_key_event(key, &mut c, &mut view, Instant::now());
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn quit_keys() {
        let (mut c, mut view) = setup(1);
        let now = Instant::now();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q')), &mut c, &mut view, now),
            InputResult::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key_event(ctrl_c, &mut c, &mut view, now),
            InputResult::Quit
        );
    }

    #[test]
    fn esc_closes_popup_before_quitting() {
        let (mut c, mut view) = setup(1);
        let now = Instant::now();
        handle_key_event(press(KeyCode::Tab), &mut c, &mut view, now);
        assert_eq!(c.surface().selected().unwrap().node_id, "A");
        assert_eq!(
            handle_key_event(press(KeyCode::Esc), &mut c, &mut view, now),
            InputResult::Continue
        );
        assert!(c.surface().selected().is_none());
        assert_eq!(
            handle_key_event(press(KeyCode::Esc), &mut c, &mut view, now),
            InputResult::Quit
        );
    }

    #[test]
    fn any_key_closes_help() {
        let (mut c, mut view) = setup(3);
        let now = Instant::now();
        handle_key_event(press(KeyCode::Char('?')), &mut c, &mut view, now);
        assert!(view.show_help);
        let result = handle_key_event(press(KeyCode::Char('q')), &mut c, &mut view, now);
        assert_eq!(result, InputResult::Continue);
        assert!(!view.show_help);
    }

    #[test]
    fn map_keys_move_viewport() {
        let (mut c, mut view) = setup(1);
        let now = Instant::now();
        handle_key_event(press(KeyCode::Char('+')), &mut c, &mut view, now);
        assert_eq!(view.viewport.zoom, 7);
        handle_key_event(press(KeyCode::Char('w')), &mut c, &mut view, now);
        assert!(view.viewport.center_lat > 37.5);
        handle_key_event(press(KeyCode::Char('c')), &mut c, &mut view, now);
        assert_eq!(view.viewport, Viewport::default());
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut c, mut view) = setup(3);
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        handle_key_event(key, &mut c, &mut view, Instant::now());
        assert_eq!(c.index(), 0);
    }
}
