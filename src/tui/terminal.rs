//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::{CostPaths, Settings};
use crate::error::{CostError, CostResult};
use crate::rates::{RateProvider, RateService};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> CostResult<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| CostError::Tui(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| CostError::Tui(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| CostError::Tui(format!("Failed to create terminal: {}", e)))
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> CostResult<()> {
    disable_raw_mode().map_err(|e| CostError::Tui(format!("Failed to disable raw mode: {}", e)))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| CostError::Tui(format!("Failed to leave alternate screen: {}", e)))?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(
    settings: &Settings,
    paths: &CostPaths,
    rate_service: RateService<Box<dyn RateProvider>>,
) -> Result<()> {
    // First rate fetch happens before entering the alternate screen
    let mut app = App::new(settings, paths.exports_dir(), rate_service);

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app);
    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }

    Ok(())
}
