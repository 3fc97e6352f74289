use crate::application::{App, AppMode};
use crate::domain::ERROR_DISPLAY;
use crate::presentation::keypad::{button_areas, ButtonKind};
use crate::presentation::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest the calculator body grows, in columns.
const MAX_WIDTH: u16 = 44;

/// Screen regions, shared by rendering and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let width = area.width.min(MAX_WIDTH);
    let body = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(body);

    ScreenLayout {
        header: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        status: chunks[3],
    }
}

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.screen.theme());
    let layout = screen_layout(f.area());

    f.render_widget(Block::default().style(palette.base()), f.area());

    let display_width = layout.display.width.saturating_sub(2) as usize;
    app.screen.set_viewport_width(display_width);

    render_header(f, app, &palette, layout.header);
    render_display(f, app, &palette, layout.display);
    render_keypad(f, &palette, layout.keypad);
    render_status_bar(f, app, &palette, layout.status);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll, &palette);
    }
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title = Paragraph::new("tcalc")
        .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD));
    f.render_widget(title, area);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("t ", Style::default().fg(palette.muted)),
        Span::raw(app.screen.theme_icon()),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(toggle, area);
}

fn render_display(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let is_error = app.screen.text() == ERROR_DISPLAY;
    let display = Paragraph::new(app.screen.visible_text())
        .alignment(Alignment::Right)
        .style(palette.display(is_error))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style()),
        );
    f.render_widget(display, area);
}

fn render_keypad(f: &mut Frame, palette: &Palette, area: Rect) {
    for (rect, button) in button_areas(area) {
        let (bg, fg) = match button.kind {
            ButtonKind::Digit => (palette.digit_bg, palette.digit_fg),
            ButtonKind::Operator => (palette.operator_bg, palette.operator_fg),
            ButtonKind::Function => (palette.function_bg, palette.function_fg),
            ButtonKind::Equals => (palette.equals_bg, palette.equals_fg),
        };
        let style = Style::default().bg(bg).fg(fg);

        let block = if rect.height >= 3 {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().bg(bg).fg(palette.background))
        } else {
            Block::default()
        };
        let inner = block.inner(rect);
        f.render_widget(block.style(style), rect);

        if inner.height == 0 {
            continue;
        }
        let label_area = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        let label = Paragraph::new(button.label)
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD));
        f.render_widget(label, label_area);
    }
}

fn render_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            "Enter/=: calc | Esc: clear | t: theme | ?: help | q: quit".to_string()
        }),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(palette.muted))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style())
                .title("Status"),
        );
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize, palette: &Palette) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style())
                .title(format!(
                    "tcalc Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                )),
        )
        .style(palette.base());

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"TCALC KEY REFERENCE

=== ENTRY ===
0-9             Digits
.               Decimal point (one per number)
+               Add
- or −          Subtract
* or ×          Multiply
/ or ÷          Divide
%               Percent: 50% is 0.5, 200+10% is 200.1

=== ACTIONS ===
Enter or =      Calculate
Esc             Clear everything (AC)
Backspace       Delete the last character
Ctrl+C          Copy the display to the clipboard
Ctrl+V          Paste into the display
t               Toggle light/dark theme (remembered)
F1 or ?         Show this help
q or Ctrl+Q     Quit

=== RULES ===
• After a result, a digit starts a new number and an operator
  continues from the result.
• Two operators in a row are not allowed, so a negative number
  cannot follow an operator: 5×−3 cannot be entered.
• Division by zero and malformed input show Error. Type a new
  number or press Esc to continue.

=== MOUSE ===
Click any keypad button.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#;
