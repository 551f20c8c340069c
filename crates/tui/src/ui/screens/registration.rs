use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, RegistrationField},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let box_width = 46;
    let box_height = 11;
    let card_area = centered_box(box_width, box_height, area);

    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" Student Registration ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Course
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Phone
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Address
        ])
        .margin(1)
        .split(inner);

    let form = &state.registration;
    let fields = [
        (rows[0], RegistrationField::Name, form.name.as_str()),
        (rows[2], RegistrationField::Course, form.course.as_str()),
        (rows[4], RegistrationField::Phone, form.phone.as_str()),
        (rows[6], RegistrationField::Address, form.address.as_str()),
    ];

    for (row, field, value) in fields {
        render_field(frame, row, field, value, form.focus == field, &theme);
    }
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    field: RegistrationField,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<18}", field.label()),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Calculates a centered rect for the form box.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
