//! Distribution view
//!
//! Income entry plus the live allocation table: each category's share of the
//! entered income, the aggregate assigned percentage with an over-allocation
//! warning, and the total distributed amount.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::services::DistributionSummary;
use crate::tui::app::{ActiveEdit, App, DistributionFocus};
use crate::tui::layout::DistributionLayout;

/// Render the distribution view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DistributionLayout::new(area);
    let summary = DistributionSummary::compute(app.income.cents(), app.store.list());

    render_income_field(frame, app, layout.income);
    render_assigned_header(frame, &summary, layout.header);
    render_allocation_table(frame, app, &summary, layout.categories);
    render_total(frame, app, &summary, layout.total);
}

/// Render the read-only income display driven by raw keystrokes
fn render_income_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.distribution_focus == DistributionFocus::Income && !app.is_editing();
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .title(" Income ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let display = app
        .income
        .as_money()
        .format_with_symbol(&app.settings.currency_symbol);

    let hint = if focused { "  (digits to type, Esc to clear)" } else { "" };
    let line = Line::from(vec![
        Span::styled(
            display,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Right)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Render the assigned-percentage line, with the warning glyph when the
/// categories claim more than 100% of income
fn render_assigned_header(frame: &mut Frame, summary: &DistributionSummary, area: Rect) {
    let over = summary.is_over_allocated();
    let style = if over {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut text = format!("{:.2}% assigned", summary.total_percentage_display());
    if over {
        text.push_str(" ⚠");
    }

    let line = Line::from(vec![
        Span::styled(
            " Distribution",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(text, style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the per-category allocation table
fn render_allocation_table(
    frame: &mut Frame,
    app: &mut App,
    summary: &DistributionSummary,
    area: Rect,
) {
    let is_focused = app.distribution_focus == DistributionFocus::List;
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if summary.rows.is_empty() {
        let text = Paragraph::new("No categories. Switch to the Categories tab to add some.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.clone();
    let rows: Vec<Row> = summary
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let editing_this = matches!(app.active_edit, ActiveEdit::Percentage(id) if id == row.id)
                && i == app.selected_index;

            let percent_cell = if editing_this {
                Cell::from(app.edit_input.to_line(true))
            } else if row.percentage > 0.0 {
                Cell::from(format!("{} %", crate::tui::app::format_percentage_input(row.percentage * 100.0)))
            } else {
                Cell::from(Span::styled("0 %", Style::default().fg(Color::DarkGray)))
            };

            Row::new(vec![
                Cell::from(row.name.clone()),
                percent_cell,
                Cell::from(row.allocated.format_with_symbol(&symbol))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let widths = [
        ratatui::layout::Constraint::Min(20),
        ratatui::layout::Constraint::Length(12),
        ratatui::layout::Constraint::Length(16),
    ];

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Percent").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Allocated").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index.min(summary.rows.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the total distributed line
fn render_total(frame: &mut Frame, app: &App, summary: &DistributionSummary, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Total distributed  ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            summary
                .total_allocated
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
