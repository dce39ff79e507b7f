//! Raw mode and alternate screen setup with guaranteed teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Puts the terminal back the way it was when dropped.
///
/// Only the steps that actually succeeded are undone, so a failure halfway
/// through [`TerminalGuard::enter`] still leaves raw mode off.
#[derive(Debug, Default)]
pub(super) struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen, and mouse capture.
    pub(super) fn enter() -> io::Result<Self> {
        let mut guard = Self::default();
        enable_raw_mode()?;
        guard.raw_mode = true;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        guard.alternate_screen = true;
        debug!("Terminal prepared");
        Ok(guard)
    }

    /// Undoes whatever `enter` set up. Safe to call more than once.
    pub(super) fn restore(&mut self) -> io::Result<()> {
        if self.raw_mode {
            disable_raw_mode()?;
            self.raw_mode = false;
        }
        if self.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
            self.alternate_screen = false;
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.raw_mode || self.alternate_screen
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.is_active() {
            return;
        }
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_guard_restores_nothing() {
        let mut guard = TerminalGuard::default();
        assert!(!guard.is_active());
        assert!(guard.restore().is_ok());
        assert!(guard.restore().is_ok());
        assert!(!guard.is_active());
    }
}
