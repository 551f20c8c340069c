use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{app::AppState, ui::theme::Theme};

/// Keypad labels, row by row. The empty slot keeps the grid rectangular.
const KEYPAD: [[&str; 4]; 5] = [
    ["AC", "+/-", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "=", ""],
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let content = centered_column(36, area);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Display
            Constraint::Length(15), // Keypad (5 rows of 3)
            Constraint::Min(0),
        ])
        .split(content);

    render_display(frame, layout[0], state, &theme);
    render_keypad(frame, layout[1], &theme);
}

fn render_display(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let calc = &state.calculator;
    let color = if calc.is_error() {
        theme.error
    } else {
        theme.positive
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));

    let text = Paragraph::new(Line::from(Span::styled(
        calc.display().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right)
    .block(block);

    frame.render_widget(text, area);
}

fn render_keypad(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 5])
        .split(area);

    for (row_area, row) in rows.iter().zip(KEYPAD) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(*row_area);

        for (cell_area, label) in cells.iter().zip(row) {
            if label.is_empty() {
                continue;
            }
            render_key(frame, *cell_area, label, theme);
        }
    }
}

fn render_key(frame: &mut Frame<'_>, area: Rect, label: &str, theme: &Theme) {
    let color = match label {
        "+" | "-" | "×" | "÷" => theme.accent,
        "=" => theme.positive,
        "AC" | "+/-" | "%" => theme.text_muted,
        _ => theme.text,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let key = Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(key, area);
}

fn centered_column(width: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);

    horizontal[1]
}
