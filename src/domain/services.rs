//! Evaluation services that bridge the calculator display and the parser.
//!
//! The display uses typographic operator glyphs and a postfix percent sign.
//! Before parsing, the display text is translated into plain ASCII arithmetic
//! and every `<number>%` is rewritten as `(<number>/100)`.

use super::errors::{EvaluationError, EvaluationResult};
use super::parser::{ExpressionEvaluator, Parser};

/// Evaluates calculator display text and formats results for display.
///
/// # Examples
///
/// ```
/// use tcalc::domain::DisplayEvaluator;
///
/// assert_eq!(DisplayEvaluator::evaluate("2+3×4").unwrap(), 14.0);
/// assert_eq!(DisplayEvaluator::evaluate("50%").unwrap(), 0.5);
/// assert!(DisplayEvaluator::evaluate("10÷0").is_err());
/// assert_eq!(DisplayEvaluator::format_number(0.5), "0.5");
/// ```
pub struct DisplayEvaluator;

impl DisplayEvaluator {
    /// Evaluates display text to a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Syntax`] for malformed input such as a trailing
    /// operator, and [`EvaluationError::NonFinite`] when the result is infinite
    /// or NaN (division by zero, overflow).
    pub fn evaluate(display: &str) -> EvaluationResult<f64> {
        let expression = Self::expand_percentages(&Self::translate_symbols(display));

        let mut parser = Parser::new(&expression)?;
        let ast = parser.parse()?;
        let value = ExpressionEvaluator::evaluate(&ast);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvaluationError::NonFinite(value))
        }
    }

    /// Replaces display glyphs with their ASCII operators.
    pub fn translate_symbols(display: &str) -> String {
        display
            .chars()
            .map(|ch| match ch {
                '×' => '*',
                '÷' => '/',
                '−' => '-',
                other => other,
            })
            .collect()
    }

    /// Rewrites each `digits[.digits]%` occurrence to `(digits[.digits]/100)`.
    ///
    /// Matches are found leftmost first and never overlap. A `%` not directly
    /// preceded by such a number is left in place.
    pub fn expand_percentages(expression: &str) -> String {
        let chars: Vec<char> = expression.chars().collect();
        let mut output = String::with_capacity(expression.len());
        let mut i = 0;

        while i < chars.len() {
            if let Some(end) = Self::percent_literal_end(&chars, i) {
                let number: String = chars[i..end].iter().collect();
                output.push('(');
                output.push_str(&number);
                output.push_str("/100)");
                // skip the number and its '%'
                i = end + 1;
            } else {
                output.push(chars[i]);
                i += 1;
            }
        }

        output
    }

    /// If a percent literal starts at `start`, returns the index of its `%`.
    fn percent_literal_end(chars: &[char], start: usize) -> Option<usize> {
        let digits_from = |from: usize| {
            chars[from..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count()
        };

        let integer_len = digits_from(start);
        if integer_len == 0 {
            return None;
        }
        let mut end = start + integer_len;

        if chars.get(end) == Some(&'.') {
            let fraction_len = digits_from(end + 1);
            if fraction_len > 0 {
                end += 1 + fraction_len;
            }
        }

        (chars.get(end) == Some(&'%')).then_some(end)
    }

    /// Formats a result the way it should appear on the display.
    ///
    /// Uses the shortest representation that round-trips, drops the fraction
    /// of integral values, shows negative zero as `0`, and switches to
    /// exponent notation (`1e+21`, `1e-7`) for very large or very small
    /// magnitudes.
    pub fn format_number(value: f64) -> String {
        if value == 0.0 {
            return "0".to_string();
        }

        let magnitude = value.abs();
        if magnitude >= 1e21 || magnitude < 1e-6 {
            let formatted = format!("{:e}", value);
            match formatted.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    format!("{}e+{}", mantissa, exponent)
                }
                _ => formatted,
            }
        } else {
            format!("{}", value)
        }
    }
}
