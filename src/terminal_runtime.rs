use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::GridSize;
use crate::game::GameState;
use crate::renderer;

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode alternate screen plus the board size it was opened with.
///
/// The board never follows later resizes. Dropping the session restores the
/// terminal.
pub struct TerminalSession {
    terminal: AppTerminal,
    board: GridSize,
}

impl TerminalSession {
    /// Measures the terminal, then switches it into game mode.
    pub fn enter() -> io::Result<Self> {
        let board = GridSize::from(terminal::size()?);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let opened = execute!(stdout, EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        match opened {
            Ok(terminal) => Ok(Self { terminal, board }),
            Err(error) => {
                restore();
                Err(error)
            }
        }
    }

    /// Board dimensions fixed at startup.
    #[must_use]
    pub fn board(&self) -> GridSize {
        self.board
    }

    /// Blits the current grid and flushes it to the screen.
    pub fn present(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, state))
            .map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
    }
}

/// Restores the terminal before the default panic output is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore();
        default_hook(panic_info);
    }));
}

fn restore() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
