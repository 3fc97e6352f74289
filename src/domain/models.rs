//! Core value types for the calculator: the input token alphabet and the
//! persisted theme preference.

use std::fmt;

/// Buffer contents at startup and after a clear.
pub const INITIAL_BUFFER: &str = "0";

/// Buffer contents after a failed calculation.
pub const ERROR_DISPLAY: &str = "Error";

/// An arithmetic operator as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    /// The character shown on the display for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
            Operator::Percent => '%',
        }
    }

    /// Parses a display symbol or its ASCII keyboard alias.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '−' | '-' => Some(Operator::Subtract),
            '×' | '*' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            '%' => Some(Operator::Percent),
            _ => None,
        }
    }

    /// Returns true if `ch` separates numeric runs in the buffer.
    ///
    /// ASCII `-` counts because negative results are formatted with it.
    pub fn is_operator_char(ch: char) -> bool {
        matches!(ch, '+' | '−' | '-' | '×' | '÷' | '%')
    }
}

/// A decimal digit. Only `0..=9` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Every digit, indexed by its value.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Digit(value)) } else { None }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn symbol(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One unit of calculator input: a digit, the decimal point, or an operator.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{InputToken, Operator};
///
/// assert_eq!(InputToken::from_char('7'), InputToken::digit(7));
/// assert_eq!(InputToken::from_char('*'), Some(InputToken::Operator(Operator::Multiply)));
/// assert_eq!(InputToken::from_char('x'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputToken {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
}

impl InputToken {
    /// A digit token, or `None` when `value` is not a single decimal digit.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(InputToken::Digit)
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::digit),
            '.' => Some(InputToken::DecimalPoint),
            _ => Operator::from_char(ch).map(InputToken::Operator),
        }
    }

    /// The character appended to the buffer for this token.
    pub fn symbol(self) -> char {
        match self {
            InputToken::Digit(d) => d.symbol(),
            InputToken::DecimalPoint => '.',
            InputToken::Operator(op) => op.symbol(),
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(self, InputToken::Operator(_))
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Light or dark display style, persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The literal written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Reads a stored literal. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Glyph on the theme toggle: it shows the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "🌙",
            ThemePreference::Dark => "☀️",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_keyboard_aliases() {
        assert_eq!(InputToken::from_char('-'), Some(InputToken::Operator(Operator::Subtract)));
        assert_eq!(InputToken::from_char('/'), Some(InputToken::Operator(Operator::Divide)));
        assert_eq!(InputToken::from_char('÷'), Some(InputToken::Operator(Operator::Divide)));
        assert_eq!(InputToken::from_char('.'), Some(InputToken::DecimalPoint));
        assert_eq!(InputToken::from_char(' '), None);
    }

    #[test]
    fn test_token_symbols_use_display_glyphs() {
        assert_eq!(InputToken::Operator(Operator::Subtract).symbol(), '−');
        assert_eq!(InputToken::Operator(Operator::Multiply).symbol(), '×');
        assert_eq!(InputToken::Digit(Digit::ALL[0]).symbol(), '0');
        assert_eq!(InputToken::Digit(Digit::ALL[9]).symbol(), '9');
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(9), Some(Digit::ALL[9]));
        assert_eq!(Digit::new(10), None);
        assert_eq!(InputToken::digit(255), None);
        for (value, digit) in Digit::ALL.iter().enumerate() {
            assert_eq!(usize::from(digit.value()), value);
        }
    }

    #[test]
    fn test_operator_chars() {
        for ch in ['+', '−', '-', '×', '÷', '%'] {
            assert!(Operator::is_operator_char(ch), "{ch} should be an operator");
        }
        assert!(!Operator::is_operator_char('.'));
        assert!(!Operator::is_operator_char('5'));
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("purple")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
    }

    #[test]
    fn test_theme_toggle_and_icon() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Light.icon(), "🌙");
        assert_eq!(ThemePreference::Dark.icon(), "☀️");
    }

    #[test]
    fn test_theme_stored_literal_round_trips() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::from_stored(Some(theme.as_str())), theme);
        }
        assert_eq!(ThemePreference::Dark.as_str(), "dark");
        assert_eq!(ThemePreference::Light.to_string(), "light");
    }
}
