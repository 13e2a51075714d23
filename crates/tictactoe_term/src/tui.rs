//! Terminal setup and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::app::App;
use crate::config::TermConfig;
use crate::ui;

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Puts the terminal back the way it was found when dropped.
///
/// Created as raw mode is enabled; any later error or unwinding panic in
/// [`run`] drops it.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self { restored: false })
    }

    /// Leaves raw mode and the alternate screen, stops mouse capture and
    /// shows the cursor. Individual failures are ignored.
    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            Show
        );
        debug!("Terminal restored");
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Runs the game until the user quits.
///
/// The terminal is restored before returning, on success and on error.
#[instrument(skip_all)]
pub fn run(config: &TermConfig) -> Result<()> {
    info!("Starting terminal UI");

    let mut guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(config.display().title())
    )
    .context("Failed to prepare terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_loop(&mut terminal, config);

    guard.restore();
    info!("Terminal UI exited");
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &TermConfig) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config, size.width, size.height)
        .context("Terminal too small for the configured board")?;

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_once() {
        let mut guard = TerminalGuard { restored: false };
        guard.restore();
        assert!(guard.restored);
        guard.restore();
        drop(guard);
    }
}
