//! Integration tests for the playback controller driven through input events

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use lmpmap::player::render::markers::MarkerColor;
use lmpmap::player::render::Viewport;
use lmpmap::player::{handle_event, InputResult, MarkerLayer, PlaybackController, ViewState};
use lmpmap::{load_dataset, DatasetSource};

use super::helpers::fixtures_dir;

fn controller() -> PlaybackController<MarkerLayer> {
    let source = DatasetSource::File(fixtures_dir().join("two_steps.json"));
    let dataset = load_dataset(&source).expect("Should load fixture");
    PlaybackController::with_period(dataset, MarkerLayer::new(), Duration::from_millis(100))
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn end_to_end_two_step_scenario() {
    let mut controller = controller();

    // Initial render shows step 0
    assert_eq!(controller.index(), 0);
    let layer = controller.surface();
    assert_eq!(layer.time_label(), "t0");
    assert_eq!(layer.len(), 1);
    let a = &layer.markers()[0];
    assert_eq!(a.color, MarkerColor::High);
    assert_eq!(a.label, "A\nPrice: 10\nScore: 0.95");

    // Slider moved to the last notch
    controller.set_index(1);
    let layer = controller.surface();
    assert_eq!(layer.time_label(), "t1");
    assert_eq!(layer.len(), 1);
    let b = &layer.markers()[0];
    assert_eq!(b.color, MarkerColor::Neutral);
    assert_eq!(b.color.hex(), "#999999");
    assert_eq!(b.label, "B\nPrice: n/a\nScore: n/a");
}

#[test]
fn autoplay_wraps_and_pause_keeps_index() {
    let mut controller = controller();
    let start = Instant::now();

    controller.toggle_play(start);
    assert!(controller.is_playing());
    assert_eq!(controller.play_label(), "⏸");

    assert!(controller.tick(start + Duration::from_millis(100)));
    assert_eq!(controller.index(), 1);
    assert!(controller.tick(start + Duration::from_millis(200)));
    assert_eq!(controller.index(), 0);
    assert_eq!(controller.surface().time_label(), "t0");

    controller.toggle_play(start + Duration::from_millis(250));
    assert!(!controller.is_playing());
    assert!(!controller.has_active_timer());
    assert!(!controller.tick(start + Duration::from_secs(5)));
    assert_eq!(controller.index(), 0);
}

#[test]
fn keyboard_drives_playback() {
    let mut controller = controller();
    let mut view = ViewState::new(Viewport::default(), 80, 24);
    let now = Instant::now();

    let result = handle_event(key(KeyCode::Right), &mut controller, &mut view, now);
    assert_eq!(result, InputResult::Continue);
    assert_eq!(controller.index(), 1);

    handle_event(key(KeyCode::Char(' ')), &mut controller, &mut view, now);
    assert!(controller.is_playing());

    // Manual step while playing keeps a single timer running
    let generation = controller.timer_generation();
    handle_event(key(KeyCode::Home), &mut controller, &mut view, now);
    assert_eq!(controller.index(), 0);
    assert!(controller.is_playing());
    assert_eq!(controller.timer_generation(), generation);

    let result = handle_event(key(KeyCode::Char('q')), &mut controller, &mut view, now);
    assert_eq!(result, InputResult::Quit);
}

#[test]
fn rapid_toggling_never_stacks_timers() {
    let mut controller = controller();
    let start = Instant::now();

    for i in 0..7 {
        controller.toggle_play(start + Duration::from_millis(i));
    }
    assert!(controller.is_playing());
    assert!(controller.has_active_timer());

    // One period after the last start, exactly one advance happens
    let due = start + Duration::from_millis(6 + 100);
    assert!(controller.tick(due));
    assert!(!controller.tick(due));
    assert_eq!(controller.index(), 1);
}
