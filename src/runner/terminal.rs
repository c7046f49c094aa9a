use crossterm::execute;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use thiserror::Error;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, optionally capturing the mouse.
pub fn init_terminal(mouse: bool) -> Result<Tui, TerminalError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave the alternate screen, release the mouse, disable raw mode and show
/// the cursor again.
pub fn restore_terminal(mut terminal: Tui) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
