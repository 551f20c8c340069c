use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, money::styled_amount_bold},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let account = &state.bank.account;

    // Keep the panels at a window-ish width, centered.
    let content = centered_column(48, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Welcome header
            Constraint::Length(5), // Balance panel
            Constraint::Length(3), // Amount input
            Constraint::Min(0),
        ])
        .split(content);

    let header = vec![
        Line::from(Span::styled(
            format!("Welcome, {}", account.holder()),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Account: {}", account.masked_number()),
            Style::default().fg(theme.text_muted),
        )),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    render_balance(frame, layout[1], state, &theme);
    render_amount_input(frame, layout[2], state, &theme);
}

fn render_balance(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Current Balance", theme);
    let balance = styled_amount_bold(state.bank.account.balance(), theme);
    card.render_with(
        frame,
        area,
        Paragraph::new(Line::from(balance)).alignment(Alignment::Center),
    );
}

fn render_amount_input(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Amount", theme).focused(true);
    let input = &state.bank.amount_input;

    let line = if input.is_empty() {
        Line::from(Span::styled("0.00│", Style::default().fg(theme.dim)))
    } else {
        Line::from(Span::styled(
            format!("{input}│"),
            Style::default().fg(theme.accent),
        ))
    };

    card.render_with(frame, area, Paragraph::new(line));
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
