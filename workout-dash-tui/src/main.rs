// workout-dash-tui/src/main.rs
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tracing_subscriber::EnvFilter;
use workout_dash_lib::AppService; // Use AppService from the lib

mod app; // Application state
mod ui; // UI rendering logic

use crate::app::App;

fn main() -> Result<()> {
    // Diagnostics go to stderr, which stays off the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Initialize the library service
    let app_service = AppService::initialize().expect("Failed to initialize AppService");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(app_service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err); // Print errors to stderr
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.clear_expired_notice();

        terminal.draw(|f| ui::render_ui(f, app))?;

        // The reload runs after the draw so the loading frame is on screen
        // while the blocking fetch is in flight.
        if app.needs_reload {
            app.run_pending_reload();
            continue;
        }

        // Poll for events with a timeout (e.g., 250ms)
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events
                if key.kind == KeyEventKind::Press {
                    // Pass key event to the app's input handler
                    app.handle_key_event(key)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
