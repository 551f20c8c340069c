pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Section};

pub use terminal::TerminalSession;
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Main layout: info bar, tab bar, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Bank => screens::bank::render(frame, layout[2], state),
        Section::Calculator => screens::calculator::render(frame, layout[2], state),
        Section::Registration => screens::registration::render(frame, layout[2], state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let account = &state.bank.account;

    let line = Line::from(vec![
        Span::styled("aerodesk", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Holder", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", account.holder())),
        Span::styled("Account", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", account.masked_number())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("Ctrl+C", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    let bar = Paragraph::new(Line::from(parts));
    frame.render_widget(bar, area);
}

/// Returns context-specific keyboard hints for the active section.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.section {
        Section::Bank => vec![
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" deposit  "),
            Span::styled("w", Style::default().fg(theme.accent)),
            Span::raw(" withdraw  "),
            Span::styled("c", Style::default().fg(theme.accent)),
            Span::raw(" clear"),
        ],
        Section::Calculator => vec![
            Span::styled("0-9", Style::default().fg(theme.accent)),
            Span::raw(" digits  "),
            Span::styled("+-*/", Style::default().fg(theme.accent)),
            Span::raw(" ops  "),
            Span::styled("=", Style::default().fg(theme.accent)),
            Span::raw(" equals  "),
            Span::styled("%", Style::default().fg(theme.accent)),
            Span::raw(" percent  "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" sign  "),
            Span::styled("c", Style::default().fg(theme.accent)),
            Span::raw(" clear"),
        ],
        Section::Registration => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next field  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" submit  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" reset"),
        ],
    }
}
