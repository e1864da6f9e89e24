//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::logging;
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the dashboard in TUI mode
///
/// This function handles:
/// 1. Routing log output into the activity log
/// 2. Terminal setup and cleanup
/// 3. UI application initialization and execution
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - The user quit the dashboard
/// * `Err` - Terminal setup or drawing failed
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(session.consents.len(), &session.source);

    // Log records become activity events from here on
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    logging::init_tui(event_sender)?;
    info!(
        "Loaded {} consents from {}",
        session.consents.len(),
        session.source
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(session.consents, event_receiver, session.ui_config);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;
    print_session_exit_success();

    Ok(())
}
