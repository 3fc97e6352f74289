//! On-screen keypad layout and mouse hit testing.
//!
//! The same geometry is used to draw the buttons and to resolve clicks, so a
//! click always lands on the button drawn under the pointer.

use crate::application::Action;
use crate::domain::{Digit, InputToken, Operator};
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Keypad columns; a button may span several.
pub const KEYPAD_COLUMNS: u16 = 4;

/// Visual group of a button, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub kind: ButtonKind,
    pub span: u16,
}

const fn digit(label: &'static str, value: usize, span: u16) -> Button {
    Button {
        label,
        action: Action::Append(InputToken::Digit(Digit::ALL[value])),
        kind: ButtonKind::Digit,
        span,
    }
}

const fn operator(label: &'static str, op: Operator) -> Button {
    Button {
        label,
        action: Action::Append(InputToken::Operator(op)),
        kind: ButtonKind::Operator,
        span: 1,
    }
}

const fn function(label: &'static str, action: Action) -> Button {
    Button {
        label,
        action,
        kind: ButtonKind::Function,
        span: 1,
    }
}

/// Button rows, top to bottom.
pub const KEYPAD: &[&[Button]] = &[
    &[
        function("AC", Action::Clear),
        function("⌫", Action::DeleteLast),
        operator("%", Operator::Percent),
        operator("÷", Operator::Divide),
    ],
    &[
        digit("7", 7, 1),
        digit("8", 8, 1),
        digit("9", 9, 1),
        operator("×", Operator::Multiply),
    ],
    &[
        digit("4", 4, 1),
        digit("5", 5, 1),
        digit("6", 6, 1),
        operator("−", Operator::Subtract),
    ],
    &[
        digit("1", 1, 1),
        digit("2", 2, 1),
        digit("3", 3, 1),
        operator("+", Operator::Add),
    ],
    &[
        digit("0", 0, 2),
        Button {
            label: ".",
            action: Action::Append(InputToken::DecimalPoint),
            kind: ButtonKind::Digit,
            span: 1,
        },
        Button {
            label: "=",
            action: Action::Calculate,
            kind: ButtonKind::Equals,
            span: 1,
        },
    ],
];

/// Splits `area` into one rectangle per keypad button.
pub fn button_areas(area: Rect) -> Vec<(Rect, &'static Button)> {
    let row_count = KEYPAD.len() as u32;
    let rows = Layout::vertical(KEYPAD.iter().map(|_| Constraint::Ratio(1, row_count))).split(area);

    let mut areas = Vec::new();
    for (row_area, buttons) in rows.iter().zip(KEYPAD.iter()) {
        let cells = Layout::horizontal(
            buttons
                .iter()
                .map(|button| Constraint::Ratio(button.span.into(), KEYPAD_COLUMNS.into())),
        )
        .split(*row_area);

        areas.extend(cells.iter().copied().zip(buttons.iter()));
    }
    areas
}

/// The button drawn at terminal cell (`column`, `row`), if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<&'static Button> {
    let position = Position::new(column, row);
    button_areas(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, button)| button)
}
