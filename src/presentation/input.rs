use crate::application::{Action, App, AppMode};
use crate::domain::InputToken;
use crate::presentation::keypad::button_at;
use crate::presentation::ui::screen_layout;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::warn;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => {
                if let Some(action) = Self::map_key(key, modifiers) {
                    Self::perform(app, action);
                }
            }
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Translates a key press into a calculator action.
    ///
    /// Shift is ignored, since `+`, `*` and `%` need it on most layouts.
    pub fn map_key(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match key {
                KeyCode::Char('c') => Some(Action::Copy),
                KeyCode::Char('v') => Some(Action::Paste),
                _ => None,
            };
        }

        match key {
            KeyCode::Enter | KeyCode::Char('=') => Some(Action::Calculate),
            KeyCode::Esc => Some(Action::Clear),
            KeyCode::Backspace => Some(Action::DeleteLast),
            KeyCode::F(1) | KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char(c) => InputToken::from_char(c).map(Action::Append),
            _ => None,
        }
    }

    /// Returns true for the keys that end the session from normal mode.
    /// Ctrl+Q arrives as a plain `q` with the control modifier.
    pub fn is_quit_key(key: KeyCode) -> bool {
        matches!(key, KeyCode::Char('q' | 'Q'))
    }

    /// Dispatches a left click on a keypad button. `terminal` is the full frame area.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, terminal: Rect) {
        if app.mode != AppMode::Normal {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let layout = screen_layout(terminal);
            if let Some(button) = button_at(layout.keypad, mouse.column, mouse.row) {
                Self::perform(app, button.action);
            }
        }
    }

    fn perform(app: &mut App, action: Action) {
        match action {
            Action::Copy => Self::copy_display(app),
            Action::Paste => Self::paste_clipboard(app),
            other => app.dispatch(other),
        }
    }

    fn copy_display(app: &mut App) {
        let text = app.display_text().to_string();
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone()));
        app.status_message = Some(match result {
            Ok(()) => format!("Copied {}", text),
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                format!("Copy failed: {}", e)
            }
        });
    }

    fn paste_clipboard(app: &mut App) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => app.paste(&text),
            Err(e) => {
                warn!(error = %e, "Clipboard paste failed");
                app.status_message = Some(format!("Paste failed: {}", e));
            }
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help(1),
            KeyCode::PageUp => app.scroll_help(-5),
            KeyCode::PageDown => app.scroll_help(5),
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
