use std::{
    io::{Stdout, stdout},
    ops::{Deref, DerefMut},
};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::Result;

/// Raw-mode terminal for the lifetime of the session.
///
/// Restores the screen on drop, so the shell comes back even when the event
/// loop bails out with an error. Restore failures are logged, not raised;
/// there is nothing left to do about them on the way out.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Deref for TerminalSession {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "could not leave raw mode");
        }
        if let Err(err) = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!(%err, "could not leave the alternate screen");
        }
        if let Err(err) = self.terminal.show_cursor() {
            tracing::warn!(%err, "could not restore the cursor");
        }
    }
}
