//! Color palettes for the light and dark themes.

use crate::domain::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

/// Every color the UI draws with, for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub display_bg: Color,
    pub display_fg: Color,
    pub error_fg: Color,
    pub digit_bg: Color,
    pub digit_fg: Color,
    pub operator_bg: Color,
    pub operator_fg: Color,
    pub function_bg: Color,
    pub function_fg: Color,
    pub equals_bg: Color,
    pub equals_fg: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf4, 0xf4, 0xf5),
    text: Color::Rgb(0x18, 0x18, 0x1b),
    muted: Color::Rgb(0x71, 0x71, 0x7a),
    border: Color::Rgb(0xd4, 0xd4, 0xd8),
    display_bg: Color::Rgb(0xff, 0xff, 0xff),
    display_fg: Color::Rgb(0x18, 0x18, 0x1b),
    error_fg: Color::Rgb(0xdc, 0x26, 0x26),
    digit_bg: Color::Rgb(0xff, 0xff, 0xff),
    digit_fg: Color::Rgb(0x27, 0x27, 0x2a),
    operator_bg: Color::Rgb(0xe0, 0xe7, 0xff),
    operator_fg: Color::Rgb(0x43, 0x38, 0xca),
    function_bg: Color::Rgb(0xe4, 0xe4, 0xe7),
    function_fg: Color::Rgb(0x3f, 0x3f, 0x46),
    equals_bg: Color::Rgb(0x4f, 0x46, 0xe5),
    equals_fg: Color::Rgb(0xff, 0xff, 0xff),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x09, 0x09, 0x0b),
    text: Color::Rgb(0xe4, 0xe4, 0xe7),
    muted: Color::Rgb(0xa1, 0xa1, 0xaa),
    border: Color::Rgb(0x3f, 0x3f, 0x46),
    display_bg: Color::Rgb(0x18, 0x18, 0x1b),
    display_fg: Color::Rgb(0xfa, 0xfa, 0xfa),
    error_fg: Color::Rgb(0xf8, 0x71, 0x71),
    digit_bg: Color::Rgb(0x27, 0x27, 0x2a),
    digit_fg: Color::Rgb(0xe4, 0xe4, 0xe7),
    operator_bg: Color::Rgb(0x1e, 0x1b, 0x4b),
    operator_fg: Color::Rgb(0xa5, 0xb4, 0xfc),
    function_bg: Color::Rgb(0x3f, 0x3f, 0x46),
    function_fg: Color::Rgb(0xf4, 0xf4, 0xf5),
    equals_bg: Color::Rgb(0x63, 0x66, 0xf1),
    equals_fg: Color::Rgb(0xff, 0xff, 0xff),
};

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => LIGHT,
            ThemePreference::Dark => DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn display(&self, is_error: bool) -> Style {
        let fg = if is_error { self.error_fg } else { self.display_fg };
        Style::default()
            .bg(self.display_bg)
            .fg(fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
