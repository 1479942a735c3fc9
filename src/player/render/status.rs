//! Status bar rendering for the native player.
//!
//! Displays the play/pause state, the current step, the color legend with
//! per-tier marker counts, and keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::player::layer::MarkerLayer;
use crate::player::render::markers::MarkerColor;
use crate::player::state::PlaybackState;
use crate::tui::theme::Theme;

/// Shortcut hints as (key, action), dropped from the end when space runs out.
const HINTS: &[(&str, &str)] = &[
    ("←→", ":step "),
    ("tab", ":popup "),
    ("+-", ":zoom "),
    ("?", ":hlp "),
    ("q", ":quit"),
];

fn span_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Build the status line for a given terminal width.
pub fn build_status_line(
    state: PlaybackState,
    step_count: usize,
    layer: &MarkerLayer,
    width: u16,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {}  ", state.play_label()),
            Style::default().fg(theme.text_primary),
        ),
        Span::styled(layer.time_label().to_string(), theme.accent_bold_style()),
        Span::styled(
            format!("  {}/{} ", state.index + 1, step_count),
            theme.text_secondary_style(),
        ),
    ];

    let counts = layer.tier_counts();
    for tier in MarkerColor::ALL {
        let count = counts.get(&tier).copied().unwrap_or(0);
        spans.push(Span::styled("●", Style::default().fg(tier.color())));
        spans.push(Span::styled(format!("{} ", count), theme.text_style()));
    }

    let play_action = if state.playing { ":pause " } else { ":play " };
    let mut hints = vec![
        Span::styled("│ ", theme.text_secondary_style()),
        Span::styled("space", theme.accent_style()),
        Span::styled(play_action, theme.text_secondary_style()),
    ];
    for (key, action) in HINTS {
        hints.push(Span::styled(*key, theme.accent_style()));
        hints.push(Span::styled(*action, theme.text_secondary_style()));
    }

    // Drop hints pairwise from the end until the line fits
    let budget = width as usize;
    while hints.len() > 1 && span_width(&spans) + span_width(&hints) > budget {
        hints.truncate(hints.len().saturating_sub(2));
        if hints.len() == 1 {
            hints.clear();
        }
    }
    spans.extend(hints);

    Line::from(spans)
}

/// Render the status bar.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: PlaybackState,
    step_count: usize,
    layer: &MarkerLayer,
    theme: &Theme,
) {
    let line = build_status_line(state, step_count, layer, area.width, theme);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render a separator line.
pub fn render_separator_line(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line: String = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(line, theme.text_secondary_style())),
        area,
    );
}
