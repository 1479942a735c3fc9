//! Terminal front end for the playback controller.
//!
//! Sets up the terminal (raw mode, alternate screen, mouse capture), runs
//! the single-threaded event loop and restores the terminal on exit, also
//! when the loop fails.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::player::controller::PlaybackController;
use crate::player::input::handle_event;
use crate::player::layer::MarkerLayer;
use crate::player::render::{draw, Viewport};
use crate::player::state::{InputResult, ViewState};
use crate::tui::theme::Theme;

/// Longest time the loop waits for input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How the player should start.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub viewport: Viewport,
    pub autoplay: bool,
    pub theme: Theme,
}

/// Restores the terminal when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut Stdout) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the interactive player until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_player(
    mut controller: PlaybackController<MarkerLayer>,
    options: PlayerOptions,
) -> Result<()> {
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let size = terminal.size()?;
    let mut view = ViewState::new(options.viewport, size.width, size.height);

    if options.autoplay {
        controller.play(Instant::now());
    }
    tracing::info!(
        steps = controller.dataset().len(),
        autoplay = options.autoplay,
        "player started"
    );

    let result = event_loop(&mut terminal, &mut controller, &mut view, &options.theme);
    terminal.show_cursor()?;
    result
}

/// Poll for input until the next tick is due, handle what arrived, fire the
/// tick, and redraw when something changed.
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut PlaybackController<MarkerLayer>,
    view: &mut ViewState,
    theme: &Theme,
) -> Result<()> {
    loop {
        if view.needs_render {
            terminal.draw(|frame| draw(frame, controller, view, theme))?;
            view.needs_render = false;
        }

        let timeout = controller
            .time_until_tick(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        if event::poll(timeout)? {
            let ev = event::read()?;
            if handle_event(ev, controller, view, Instant::now()) == InputResult::Quit {
                tracing::info!(index = controller.index(), "player closed");
                return Ok(());
            }
        }

        if controller.tick(Instant::now()) {
            view.needs_render = true;
        }
    }
}
