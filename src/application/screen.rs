//! The visible surface model drawn by the terminal UI.

use super::ports::Renderer;
use crate::domain::{ThemePreference, INITIAL_BUFFER};

/// What the display currently shows.
///
/// The text is kept whole; [`Screen::visible_text`] returns the window that
/// fits the viewport, always ending at the newest character.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    text: String,
    theme: ThemePreference,
    viewport_width: usize,
    scroll_offset: usize,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            text: INITIAL_BUFFER.to_string(),
            theme: ThemePreference::default(),
            viewport_width: 20,
            scroll_offset: 0,
        }
    }
}

impl Screen {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Glyph shown on the theme toggle.
    pub fn theme_icon(&self) -> &'static str {
        self.theme.icon()
    }

    /// Number of leading characters scrolled out of view.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    /// Updates the display width in columns and re-scrolls to the end.
    pub fn set_viewport_width(&mut self, width: usize) {
        self.viewport_width = width.max(1);
        self.scroll_to_end();
    }

    /// The trailing part of the text that fits in the viewport.
    pub fn visible_text(&self) -> String {
        self.text.chars().skip(self.scroll_offset).collect()
    }

    fn scroll_to_end(&mut self) {
        let length = self.text.chars().count();
        self.scroll_offset = length.saturating_sub(self.viewport_width);
    }
}

impl Renderer for Screen {
    fn render(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.scroll_to_end();
    }

    fn apply_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default() {
        let screen = Screen::default();
        assert_eq!(screen.text(), "0");
        assert_eq!(screen.visible_text(), "0");
        assert_eq!(screen.theme_icon(), "🌙");
    }

    #[test]
    fn test_render_scrolls_to_newest_character() {
        let mut screen = Screen::default();
        screen.set_viewport_width(5);
        screen.render("123×456÷7");
        assert_eq!(screen.scroll_offset(), 4);
        assert_eq!(screen.visible_text(), "456÷7");
    }

    #[test]
    fn test_short_text_is_not_scrolled() {
        let mut screen = Screen::default();
        screen.set_viewport_width(10);
        screen.render("42");
        assert_eq!(screen.scroll_offset(), 0);
        assert_eq!(screen.visible_text(), "42");
    }

    #[test]
    fn test_resize_rescrolls() {
        let mut screen = Screen::default();
        screen.set_viewport_width(3);
        screen.render("12345");
        assert_eq!(screen.visible_text(), "345");

        screen.set_viewport_width(10);
        assert_eq!(screen.visible_text(), "12345");

        screen.set_viewport_width(0);
        assert_eq!(screen.visible_text(), "5");
    }

    #[test]
    fn test_apply_theme_changes_icon() {
        let mut screen = Screen::default();
        screen.apply_theme(ThemePreference::Dark);
        assert_eq!(screen.theme(), ThemePreference::Dark);
        assert_eq!(screen.theme_icon(), "☀️");
    }
}
