//! TUI views module
//!
//! The tab bar, the two tab views (distribution, categories), and the
//! status bar.

pub mod categories;
pub mod distribution;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveTab, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tab_bar(frame, app, layout.tab_bar);

    match app.active_tab {
        ActiveTab::Distribution => {
            distribution::render(frame, app, layout.content);
        }
        ActiveTab::Categories => {
            categories::render(frame, app, layout.content);
        }
    }

    status_bar::render(frame, app, layout.status_bar);
}

/// Render the tab selector
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = Tabs::new(ActiveTab::TITLES.to_vec())
        .block(
            Block::default()
                .title(" divvy ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}
