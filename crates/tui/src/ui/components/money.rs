use engine::Money;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Creates a styled span for a money amount with semantic coloring.
///
/// - Positive amounts: green
/// - Negative amounts: red (negative sign shown by the amount itself)
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: Money, theme: &Theme) -> Span<'static> {
    let color = if amount.is_positive() {
        theme.positive
    } else if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    };

    Span::styled(amount.to_string(), Style::default().fg(color))
}

/// Creates a styled span with bold modifier for emphasis (e.g. the balance).
#[must_use]
pub fn styled_amount_bold(amount: Money, theme: &Theme) -> Span<'static> {
    let base = styled_amount(amount, theme);
    let style = base.style.add_modifier(Modifier::BOLD);
    Span::styled(base.content, style)
}
