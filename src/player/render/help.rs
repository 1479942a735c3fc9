//! Help overlay rendering for the native player.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "╔═══════════════════════════════════════════╗",
    "║            lmpmap Player Help             ║",
    "╠═══════════════════════════════════════════╣",
    "║                                           ║",
    "║  Playback                                 ║",
    "║    Space        Play / Pause              ║",
    "║    <-/->        Previous / next step      ║",
    "║    Shift+<-/->  Jump 10% of the steps     ║",
    "║    Home/End     First / last step         ║",
    "║    Click/drag   Move the slider           ║",
    "║                                           ║",
    "║  Map                                      ║",
    "║    +/-          Zoom in / out             ║",
    "║    w/a/s/d      Pan north/west/south/east ║",
    "║    c            Recenter                  ║",
    "║    Tab          Next marker popup         ║",
    "║    Click        Open nearest popup        ║",
    "║    Esc          Close popup               ║",
    "║                                           ║",
    "║  General                                  ║",
    "║    ?            Show this help            ║",
    "║    q            Quit player               ║",
    "║                                           ║",
    "║         Press any key to close            ║",
    "╚═══════════════════════════════════════════╝",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: u16 = 45;

/// Centered area for the help box, shrunk to fit small terminals.
pub fn help_area(area: Rect) -> Rect {
    let width = HELP_BOX_WIDTH.min(area.width);
    let height = (HELP_LINES.len() as u16).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the help overlay on top of whatever is in `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = help_area(area);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|l| Line::from(Span::styled(*l, theme.accent_style())))
        .collect();

    frame.render_widget(Clear, help);
    frame.render_widget(Paragraph::new(lines), help);
}
