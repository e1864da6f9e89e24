//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consent::Consent;
use crate::consts::cli_consts::{SPLASH_DURATION, TICK_RATE};
use crate::events::Event as ActivityEvent;
use crate::i18n::Language;
use crate::ui::dashboard::{DashboardState, KeyOutcome, ViewMode, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub language: Language,
    pub view_mode: ViewMode,
}

impl UIConfig {
    pub fn new(with_background_color: bool, language: Language, view_mode: ViewMode) -> Self {
        Self {
            with_background_color,
            language,
            view_mode,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The consent dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Consents handed to the dashboard once the splash screen ends.
    consents: Option<Vec<Consent>>,

    /// Receives activity events from the logger.
    event_receiver: mpsc::Receiver<ActivityEvent>,

    /// Events received while the splash screen is up.
    early_events: Vec<ActivityEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        consents: Vec<Consent>,
        event_receiver: mpsc::Receiver<ActivityEvent>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            consents: Some(consents),
            event_receiver,
            early_events: Vec::new(),
            ui_config,
        }
    }

    /// Leave the splash screen for the dashboard.
    fn open_dashboard(&mut self) {
        let consents = self.consents.take().unwrap_or_default();
        let mut state = DashboardState::new(consents, self.ui_config.clone());
        for event in self.early_events.drain(..) {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            match &mut app.current_screen {
                Screen::Splash => app.early_events.push(event),
                Screen::Dashboard(state) => state.add_event(event),
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= SPLASH_DURATION {
            app.open_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if let Screen::Dashboard(state) = &mut app.current_screen {
                    if state.handle_key(key) == KeyOutcome::Quit {
                        return Ok(());
                    }
                } else if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                } else {
                    // Any other key skips the splash screen
                    app.open_dashboard();
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
