//! The input/display controller.
//!
//! Owns the display buffer and the reset flag. Every entry point leaves the
//! buffer in a valid state and re-renders it, including when a calculation
//! fails.

use super::ports::Renderer;
use crate::domain::{DisplayEvaluator, InputToken, Operator, ERROR_DISPLAY, INITIAL_BUFFER};
use tracing::debug;

/// Calculator state: the text on the display and whether the next digit
/// starts a fresh entry.
///
/// # Examples
///
/// ```
/// use tcalc::application::{Calculator, Screen};
/// use tcalc::domain::{Digit, InputToken, Operator};
///
/// let mut screen = Screen::default();
/// let mut calc = Calculator::new();
/// calc.append(InputToken::Digit(Digit::ALL[2]), &mut screen);
/// calc.append(InputToken::Operator(Operator::Add), &mut screen);
/// calc.append(InputToken::Digit(Digit::ALL[3]), &mut screen);
/// calc.calculate(&mut screen);
/// assert_eq!(calc.buffer(), "5");
/// assert_eq!(screen.text(), "5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    buffer: String,
    reset_pending: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            buffer: INITIAL_BUFFER.to_string(),
            reset_pending: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True when the next digit replaces the buffer instead of extending it.
    pub fn is_reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Shows the current buffer without changing it.
    pub fn refresh<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.buffer);
    }

    /// Appends a digit, decimal point, or operator.
    ///
    /// After a result (or on a bare `0`) an operator chains onto the current
    /// buffer while anything else starts a new entry. A second decimal point
    /// in the same number and an operator directly after another operator are
    /// ignored. Returns whether the token was added.
    pub fn append<R: Renderer + ?Sized>(&mut self, token: InputToken, renderer: &mut R) -> bool {
        if self.reset_pending || self.buffer == INITIAL_BUFFER {
            if !token.is_operator() {
                self.buffer.clear();
            }
            self.reset_pending = false;
        }

        let accepted = self.accepts(token);
        if accepted {
            self.buffer.push(token.symbol());
        } else {
            debug!(token = %token, buffer = %self.buffer, "Rejected input");
        }

        renderer.render(&self.buffer);
        accepted
    }

    fn accepts(&self, token: InputToken) -> bool {
        match token {
            InputToken::DecimalPoint => !self.trailing_number().contains('.'),
            InputToken::Operator(_) => !self
                .buffer
                .chars()
                .next_back()
                .is_some_and(Operator::is_operator_char),
            InputToken::Digit(_) => true,
        }
    }

    /// The numeric run after the last operator character.
    fn trailing_number(&self) -> &str {
        match self.buffer.rfind(Operator::is_operator_char) {
            Some(index) => {
                let operator_len = self.buffer[index..]
                    .chars()
                    .next()
                    .map_or(0, char::len_utf8);
                &self.buffer[index + operator_len..]
            }
            None => &self.buffer,
        }
    }

    /// Removes the last character; a single character becomes `0`.
    pub fn delete_last<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if self.buffer.chars().count() > 1 {
            self.buffer.pop();
        } else {
            self.buffer = INITIAL_BUFFER.to_string();
        }
        renderer.render(&self.buffer);
    }

    /// Resets the buffer to `0` and clears the reset flag.
    pub fn clear<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.buffer = INITIAL_BUFFER.to_string();
        self.reset_pending = false;
        renderer.render(&self.buffer);
    }

    /// Evaluates the buffer and replaces it with the result, or with `Error`
    /// if it cannot be evaluated to a finite number.
    pub fn calculate<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        match DisplayEvaluator::evaluate(&self.buffer) {
            Ok(value) => {
                let result = DisplayEvaluator::format_number(value);
                debug!(expression = %self.buffer, result = %result, "Calculated");
                self.buffer = result;
            }
            Err(err) => {
                debug!(expression = %self.buffer, error = %err, "Calculation failed");
                self.buffer = ERROR_DISPLAY.to_string();
            }
        }
        self.reset_pending = true;
        renderer.render(&self.buffer);
    }

    /// Feeds every recognised character of `text` through [`Self::append`].
    ///
    /// Characters that are not calculator input are skipped. Returns how many
    /// tokens were accepted.
    pub fn paste<R: Renderer + ?Sized>(&mut self, text: &str, renderer: &mut R) -> usize {
        text.chars()
            .filter_map(InputToken::from_char)
            .filter(|&token| self.append(token, renderer))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemePreference;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, text: &str) {
            self.frames.push(text.to_string());
        }

        fn apply_theme(&mut self, _theme: ThemePreference) {}
    }

    fn enter(calc: &mut Calculator, out: &mut RecordingRenderer, keys: &str) {
        for ch in keys.chars() {
            let token = InputToken::from_char(ch).expect("test input must be tokens");
            calc.append(token, out);
        }
    }

    #[test]
    fn test_calculator_default() {
        let calc = Calculator::default();
        assert_eq!(calc.buffer(), "0");
        assert!(!calc.is_reset_pending());
    }

    #[test]
    fn test_first_digit_replaces_zero() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "7");
        assert_eq!(calc.buffer(), "7");

        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "00");
        assert_eq!(calc.buffer(), "0");
    }

    #[test]
    fn test_operator_on_zero_chains() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "+5");
        assert_eq!(calc.buffer(), "0+5");
    }

    #[test]
    fn test_decimal_point_on_zero_starts_fresh() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, ".5");
        assert_eq!(calc.buffer(), ".5");
    }

    #[test]
    fn test_second_decimal_point_rejected() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "3.4");
        assert!(!calc.append(InputToken::DecimalPoint, &mut out));
        assert_eq!(calc.buffer(), "3.4");
    }

    #[test]
    fn test_decimal_point_allowed_in_next_number() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "1.5×2.");
        assert_eq!(calc.buffer(), "1.5×2.");
        enter(&mut calc, &mut out, ".");
        assert_eq!(calc.buffer(), "1.5×2.");
    }

    #[test]
    fn test_adjacent_operators_rejected() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "5++");
        assert_eq!(calc.buffer(), "5+");
        enter(&mut calc, &mut out, "×−%");
        assert_eq!(calc.buffer(), "5+");
    }

    #[test]
    fn test_negative_operand_after_operator_blocked() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "5×-3");
        assert_eq!(calc.buffer(), "5×3");
    }

    #[test]
    fn test_every_operation_renders() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "5++");
        calc.delete_last(&mut out);
        calc.calculate(&mut out);
        calc.clear(&mut out);
        assert_eq!(out.frames, vec!["5", "5+", "5+", "5", "5", "0"]);
    }

    #[test]
    fn test_delete_last() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "12÷");
        calc.delete_last(&mut out);
        assert_eq!(calc.buffer(), "12");
        calc.delete_last(&mut out);
        calc.delete_last(&mut out);
        assert_eq!(calc.buffer(), "0");
        calc.delete_last(&mut out);
        assert_eq!(calc.buffer(), "0");
    }

    #[test]
    fn test_buffer_never_empty() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        for _ in 0..3 {
            enter(&mut calc, &mut out, "9");
            calc.delete_last(&mut out);
            assert!(!calc.buffer().is_empty());
        }
        assert_eq!(calc.buffer(), "0");
    }

    #[test]
    fn test_calculate_success_sets_reset() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "2+3");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "5");
        assert!(calc.is_reset_pending());
    }

    #[test]
    fn test_calculate_division_by_zero() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "10÷0");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "Error");
        assert!(calc.is_reset_pending());
        assert_eq!(out.frames.last().map(String::as_str), Some("Error"));
    }

    #[test]
    fn test_calculate_trailing_operator_is_error() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "8×");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "Error");
    }

    #[test]
    fn test_calculate_percentage() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "50%");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "0.5");
    }

    #[test]
    fn test_operator_after_result_chains() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "2+3");
        calc.calculate(&mut out);
        enter(&mut calc, &mut out, "+3");
        assert_eq!(calc.buffer(), "5+3");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "8");
    }

    #[test]
    fn test_digit_after_result_replaces() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "2+3");
        calc.calculate(&mut out);
        enter(&mut calc, &mut out, "9");
        assert_eq!(calc.buffer(), "9");
        assert!(!calc.is_reset_pending());
    }

    #[test]
    fn test_negative_result_chains() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "2−7");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "-5");
        enter(&mut calc, &mut out, "×2");
        calc.calculate(&mut out);
        assert_eq!(calc.buffer(), "-10");
    }

    #[test]
    fn test_recover_after_error() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "1÷0");
        calc.calculate(&mut out);
        enter(&mut calc, &mut out, "4");
        assert_eq!(calc.buffer(), "4");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        enter(&mut calc, &mut out, "2+3");
        calc.calculate(&mut out);
        calc.clear(&mut out);
        assert_eq!(calc.buffer(), "0");
        assert!(!calc.is_reset_pending());
    }

    #[test]
    fn test_paste_applies_input_rules() {
        let mut out = RecordingRenderer::default();
        let mut calc = Calculator::new();
        let accepted = calc.paste("12 * 3..5 ++ x1", &mut out);
        assert_eq!(calc.buffer(), "12×3.5+1");
        assert_eq!(accepted, 8);
    }
}
