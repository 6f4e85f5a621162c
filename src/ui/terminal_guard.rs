//! Puts the terminal into wizard mode and reliably takes it back out.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Raw mode plus the alternate screen for as long as the guard lives.
///
/// Leaving happens on [`TerminalGuard::restore`], on drop (early `?`
/// returns included), or from the panic hook.
pub struct TerminalGuard {
    entered: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // Built before the screen switch so a failure there still restores raw mode
        let guard = Self { entered: true };
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter the alternate screen")?;
        Ok(guard)
    }

    /// Hand the terminal back now; later calls and the drop do nothing
    pub fn restore(&mut self) {
        if std::mem::take(&mut self.entered) {
            leave_wizard_mode();
        }
    }

    pub fn is_active(&self) -> bool {
        self.entered
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Best effort: every step runs even if an earlier one fails
fn leave_wizard_mode() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let _ = io::stdout().flush();
}

/// Leave wizard mode before the panic message prints, so it is readable
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_wizard_mode();
        previous(info);
    }));
}
