//! Category management view
//!
//! Add, rename, and delete categories. The name field at the top appends a
//! new category on Enter; renames are inline on the list rows; deletes are
//! immediate.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveEdit, App, CategoriesFocus};
use crate::tui::layout::CategoriesLayout;

/// Render the categories view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = CategoriesLayout::new(area);

    render_name_input(frame, app, layout.name_input);
    render_category_list(frame, app, layout.list);
}

/// Render the new-category name field
fn render_name_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.categories_focus == CategoriesFocus::NameInput && !app.is_editing();
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .title(" Add category ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.name_input.render(frame, inner, focused);
}

/// Render the existing-category list, or the empty-state placeholder
fn render_category_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.categories_focus == CategoriesFocus::List;
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .title(" Existing categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.store.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "No categories",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "Add one above to get started",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let text = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .list()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let renaming =
                matches!(app.active_edit, ActiveEdit::Rename(id) if id == category.id)
                    && i == app.selected_index;

            let line = if renaming {
                app.edit_input.to_line(true)
            } else {
                Line::from(vec![
                    Span::styled(category.name.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {:.2}%", category.percentage_display()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.selected_index.min(app.store.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
