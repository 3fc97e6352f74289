//! tcalc - Terminal Calculator
//!
//! A terminal arithmetic calculator with a single display, an on-screen
//! keypad, keyboard shortcuts, clipboard support and a light/dark theme that
//! is remembered between sessions.

use std::io;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{info, warn};

use tcalc::application::{App, AppMode, Storage};
use tcalc::infrastructure::{init_logging, Config, JsonFileStore, MemoryStore};
use tcalc::presentation::{render_ui, InputHandler};

/// Entry point for the tcalc terminal calculator.
///
/// Resolves configuration, starts file logging, opens the preference store,
/// sets up the terminal and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    let _log_guard = init_logging(&config.log_dir());
    info!(data_dir = %config.data_dir().display(), "Starting tcalc");

    let storage = open_storage(&config);
    let mut app = App::new(storage);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!(error = %err, "Event loop failed");
        println!("{err:?}");
    }

    info!("Exiting tcalc");
    Ok(())
}

/// Opens the settings file store, or an in-memory store when the data
/// directory cannot be created.
fn open_storage(config: &Config) -> Box<dyn Storage> {
    match std::fs::create_dir_all(config.data_dir()) {
        Ok(()) => {
            let store = JsonFileStore::new(config.settings_path());
            info!(path = %store.path().display(), "Using settings file");
            Box::new(store)
        }
        Err(err) => {
            warn!(
                error = %err,
                data_dir = %config.data_dir().display(),
                "Settings directory unavailable, theme will not persist"
            );
            Box::new(MemoryStore::default())
        }
    }
}

/// Main application event loop.
///
/// Redraws after every event. Key releases and repeats reported by some
/// terminals are ignored so each press acts once.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.mode == AppMode::Normal && InputHandler::is_quit_key(key.code) {
                    return Ok(());
                }
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                InputHandler::handle_mouse_event(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            Event::Paste(text) if app.mode == AppMode::Normal => app.paste(&text),
            _ => {}
        }
    }
}
