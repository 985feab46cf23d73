mod app;
mod config;
mod expenses;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::logging::ExpenseJournal;
use anyhow::Result;
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// Poll timeout for the synchronous event loop.
const TICK_RATE: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    if let Err(e) = logging::init_tracing() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    // Load config
    let cfg = config::load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg);

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let mut state = AppState::new(cfg);
    let mut journal = ExpenseJournal::new(&state.config.journal);
    info!("expenselog started");

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = if event::poll(TICK_RATE)? {
            AppEvent::Terminal(event::read()?)
        } else {
            AppEvent::Tick
        };

        let actions = handler::handle_event(&mut state, event);

        // Drain journal entries produced by this event
        for entry in state.journal.drain(..) {
            journal.log_event(&entry);
        }

        // Process actions
        for action in actions {
            match action {
                Action::PersistConfig => {
                    if let Err(e) = config::save_config(&state.config) {
                        warn!("failed to save config: {}", e);
                    }
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    info!(
        "expenselog exiting with {} item(s) in the session list",
        state.expenses.len()
    );
    Ok(())
}
