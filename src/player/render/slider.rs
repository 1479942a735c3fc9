//! Index slider rendering for the native player.
//!
//! A horizontal bar over `[0, max_index]` with a handle at the current
//! index, followed by a `current/last` readout.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Theme;

const HANDLE: char = '⏺';
const TRACK: char = '─';
const FILLED: char = '━';

/// Column of the handle on a bar of `bar_width` cells.
///
/// Index 0 sits on the first cell and `max_index` on the last.
pub fn slider_position(bar_width: usize, index: usize, max_index: usize) -> usize {
    if bar_width == 0 || max_index == 0 {
        return 0;
    }
    let ratio = (index.min(max_index) as f64) / max_index as f64;
    (ratio * (bar_width - 1) as f64).round() as usize
}

/// Slider value under a clicked column, or `None` outside the bar.
pub fn slider_value_at(
    column: u16,
    bar_start: u16,
    bar_width: u16,
    max_index: usize,
) -> Option<usize> {
    if column < bar_start || column >= bar_start.saturating_add(bar_width) {
        return None;
    }
    if bar_width <= 1 {
        return Some(0);
    }
    let ratio = (column - bar_start) as f64 / (bar_width - 1) as f64;
    Some((ratio * max_index as f64).round() as usize)
}

/// Build the slider character array.
///
/// # Returns
/// A tuple of (bar_chars, handle_position).
pub fn build_slider_chars(bar_width: usize, index: usize, max_index: usize) -> (Vec<char>, usize) {
    let mut bar = vec![TRACK; bar_width];
    let pos = slider_position(bar_width, index, max_index);
    if pos < bar_width {
        bar[pos] = HANDLE;
    }
    (bar, pos)
}

/// Readout shown after the bar, e.g. ` 3/24`.
pub fn slider_readout(index: usize, max_index: usize) -> String {
    format!(" {}/{} ", index + 1, max_index + 1)
}

/// Render the slider into a one-row area. Returns the bar's own area, which
/// is what mouse input maps against.
pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    max_index: usize,
    theme: &Theme,
) -> Rect {
    let readout = slider_readout(index, max_index);
    // One column of left padding
    let bar_width = (area.width as usize).saturating_sub(1 + readout.len());
    let (bar, pos) = build_slider_chars(bar_width, index, max_index);

    let filled: String = std::iter::repeat(FILLED).take(pos).collect();
    let rest: String = bar.iter().skip(pos + 1).collect();

    let mut spans = vec![Span::raw(" "), Span::styled(filled, theme.accent_style())];
    if pos < bar_width {
        spans.push(Span::styled(
            HANDLE.to_string(),
            Style::default().fg(theme.text_primary),
        ));
    }
    spans.push(Span::styled(rest, theme.text_secondary_style()));
    spans.push(Span::styled(readout, theme.text_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    Rect::new(area.x + 1, area.y, bar_width as u16, 1)
}
