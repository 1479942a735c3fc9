//! Integration tests for drawing a full frame

use std::time::Instant;

use lmpmap::player::render::{draw, Viewport};
use lmpmap::player::{MarkerLayer, PlaybackController, ViewState};
use lmpmap::tui::Theme;
use lmpmap::{load_dataset, DatasetSource};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use super::helpers::fixtures_dir;

fn controller() -> PlaybackController<MarkerLayer> {
    let source = DatasetSource::File(fixtures_dir().join("two_steps.json"));
    PlaybackController::new(load_dataset(&source).unwrap(), MarkerLayer::new())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(
    controller: &PlaybackController<MarkerLayer>,
    view: &mut ViewState,
) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = Theme::default();
    terminal
        .draw(|frame| draw(frame, controller, view, &theme))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn frame_shows_time_label_and_play_glyph() {
    let controller = controller();
    let mut view = ViewState::new(Viewport::default(), 100, 30);

    let text = render(&controller, &mut view);
    assert!(text.contains("t0"));
    assert!(text.contains("▶"));
    assert!(text.contains(" 1/2 "));
}

#[test]
fn frame_tracks_slider_and_playing_state() {
    let mut controller = controller();
    let mut view = ViewState::new(Viewport::default(), 100, 30);

    controller.set_index(1);
    controller.play(Instant::now());
    let text = render(&controller, &mut view);

    assert!(text.contains("t1"));
    assert!(text.contains("⏸"));
    assert!(text.contains(" 2/2 "));
}

#[test]
fn draw_records_hit_areas() {
    let controller = controller();
    let mut view = ViewState::new(Viewport::default(), 100, 30);

    render(&controller, &mut view);
    assert!(view.map_area.width > 0 && view.map_area.height > 0);
    assert_eq!(view.slider_area.y, 28);
    assert!(view.slider_area.width > 0);
}

#[test]
fn popup_shows_selected_marker_label() {
    let mut controller = controller();
    let mut view = ViewState::new(Viewport::new(1.0, 1.0, 6), 100, 30);

    controller.surface_mut().select(0);
    let text = render(&controller, &mut view);
    assert!(text.contains("Price: 10"));
    assert!(text.contains("Score: 0.95"));
}

#[test]
fn help_overlay_lists_keys() {
    let controller = controller();
    let mut view = ViewState::new(Viewport::default(), 100, 30);

    view.toggle_help();
    let text = render(&controller, &mut view);
    assert!(text.contains("lmpmap Player Help"));
    assert!(text.contains("Play / Pause"));
}
