//! Terminal setup and teardown.
//!
//! Raw mode with the alternate screen and mouse capture enabled; mouse
//! events drive the share menu's outside-click handling. A panic hook
//! restores the terminal before the default handler prints.

use std::io::{self, Stdout, stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal into raw mode and returns the ratatui terminal.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));

    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Leaves the alternate screen and disables raw mode.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}
