//! Application state for the terminal calculator.
//!
//! This module wires the controller, the theme manager and the visible
//! surface together into one session object.

use super::calculator::Calculator;
use super::ports::Storage;
use super::screen::Screen;
use super::theme::ThemeManager;
use crate::domain::{InputToken, ThemePreference};
use tracing::warn;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Calculator input is active
    Normal,
    /// Help screen is displayed
    Help,
}

/// A user intent, produced by a key press or a keypad click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Append(InputToken),
    DeleteLast,
    Clear,
    Calculate,
    ToggleTheme,
    /// Copy the display to the clipboard (handled by the presentation layer)
    Copy,
    /// Paste from the clipboard (handled by the presentation layer)
    Paste,
    ShowHelp,
}

/// Main application state.
///
/// Construction runs the startup sequence: the saved theme is applied first,
/// then the initial buffer is rendered.
///
/// # Examples
///
/// ```
/// use tcalc::application::{Action, App};
/// use tcalc::domain::{Digit, InputToken};
/// use tcalc::infrastructure::MemoryStore;
///
/// let mut app = App::new(Box::new(MemoryStore::default()));
/// app.dispatch(Action::Append(InputToken::Digit(Digit::ALL[4])));
/// assert_eq!(app.display_text(), "4");
/// ```
pub struct App {
    /// The input/display controller
    pub calculator: Calculator,
    /// Theme preference and its storage
    pub theme: ThemeManager<Box<dyn Storage>>,
    /// What the display currently shows
    pub screen: Screen,
    /// Current application mode
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let mut screen = Screen::default();
        let theme = ThemeManager::load_on_startup(storage, &mut screen);
        let calculator = Calculator::new();
        calculator.refresh(&mut screen);

        Self {
            calculator,
            theme,
            screen,
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
        }
    }

    /// Applies an action to the session.
    ///
    /// `Copy` and `Paste` need the system clipboard and are no-ops here; the
    /// input handler resolves them and calls [`App::paste`] or reads
    /// [`App::display_text`].
    pub fn dispatch(&mut self, action: Action) {
        self.status_message = None;

        match action {
            Action::Append(token) => {
                self.calculator.append(token, &mut self.screen);
            }
            Action::DeleteLast => self.calculator.delete_last(&mut self.screen),
            Action::Clear => self.calculator.clear(&mut self.screen),
            Action::Calculate => self.calculator.calculate(&mut self.screen),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ShowHelp => {
                self.mode = AppMode::Help;
                self.help_scroll = 0;
            }
            Action::Copy | Action::Paste => {}
        }
    }

    fn toggle_theme(&mut self) {
        if let Err(err) = self.theme.toggle(&mut self.screen) {
            warn!(error = %err, "Could not save theme preference");
            self.status_message = Some(format!("Theme not saved: {}", err));
        }
    }

    /// Feeds pasted text through the normal input rules.
    pub fn paste(&mut self, text: &str) {
        let accepted = self.calculator.paste(text, &mut self.screen);
        self.status_message = Some(format!("Pasted {} character(s)", accepted));
    }

    /// The full text of the display.
    pub fn display_text(&self) -> &str {
        self.calculator.buffer()
    }

    pub fn current_theme(&self) -> ThemePreference {
        self.theme.current()
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn scroll_help(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
    }
}
