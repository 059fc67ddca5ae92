//! Status bar view
//!
//! Shows the assigned total, any transient status message, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::DistributionSummary;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = DistributionSummary::compute(app.income.cents(), app.store.list());

    let assigned_color = if summary.is_over_allocated() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Assigned: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{:.2}%", summary.total_percentage_display()),
            Style::default()
                .fg(assigned_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if summary.is_over_allocated() {
        spans.push(Span::styled(" ⚠", Style::default().fg(Color::Red)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.is_editing() {
        " Enter/Esc:Done "
    } else {
        " q:Quit  Tab:Switch tab  ↑↓:Focus  Enter:Edit "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_len = hints.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hint_len);
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
