//! Owned terminal session: raw mode and alternate screen, restored exactly once.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, terminal, QueueableCommand};

/// Scopes the process-wide terminal state (raw mode, alternate screen,
/// hidden cursor) to one value.
///
/// `exit` is idempotent, and `Drop` performs a best-effort restore so the
/// terminal comes back even when a game hook panics mid-frame.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen. Failing here is fatal to the
    /// run; nothing is partially acquired on error paths crossterm reports.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        out.queue(terminal::EnterAlternateScreen)?;
        out.queue(cursor::Hide)?;
        out.queue(terminal::DisableLineWrap)?;
        out.flush()?;
        Ok(Self { active: true })
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let mut out = io::stdout();
        out.queue(terminal::EnableLineWrap)?;
        out.queue(cursor::Show)?;
        out.queue(terminal::LeaveAlternateScreen)?;
        out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
