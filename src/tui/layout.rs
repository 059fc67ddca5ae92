//! Layout definitions for the TUI
//!
//! Single-column layout: tab bar on top, active tab content, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar at the top
    pub tab_bar: Rect,
    /// Active tab content
    pub content: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the distribution tab
pub struct DistributionLayout {
    /// Income entry field
    pub income: Rect,
    /// Assigned-percentage header line
    pub header: Rect,
    /// Category allocation table
    pub categories: Rect,
    /// Total distributed line
    pub total: Rect,
}

impl DistributionLayout {
    /// Calculate distribution tab layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Income field
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Categories
                Constraint::Length(2), // Total
            ])
            .split(area);

        Self {
            income: chunks[0],
            header: chunks[1],
            categories: chunks[2],
            total: chunks[3],
        }
    }
}

/// Layout for the categories tab
pub struct CategoriesLayout {
    /// New-category name field
    pub name_input: Rect,
    /// Existing category list
    pub list: Rect,
}

impl CategoriesLayout {
    /// Calculate categories tab layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name input
                Constraint::Min(3),    // List
            ])
            .split(area);

        Self {
            name_input: chunks[0],
            list: chunks[1],
        }
    }
}
