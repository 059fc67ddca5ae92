//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the shared category store, the ephemeral income accumulator, the active
//! tab, and any inline edit in progress.

use crate::config::settings::Settings;
use crate::models::{CategoryId, Income};
use crate::storage::CategoryStore;

use super::widgets::TextInput;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Distribution,
    Categories,
}

impl ActiveTab {
    /// Tab titles in display order
    pub const TITLES: [&'static str; 2] = ["Distribution", "Categories"];

    /// Index into TITLES
    pub fn index(&self) -> usize {
        match self {
            Self::Distribution => 0,
            Self::Categories => 1,
        }
    }
}

/// Which element has focus on the distribution tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionFocus {
    #[default]
    Income,
    List,
}

/// Which element has focus on the categories tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoriesFocus {
    #[default]
    NameInput,
    List,
}

/// An inline edit in progress on a list row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveEdit {
    #[default]
    None,
    /// Editing the selected category's percentage (distribution tab)
    Percentage(CategoryId),
    /// Renaming the selected category (categories tab)
    Rename(CategoryId),
}

/// Main application state
pub struct App {
    /// The category store shared by both tabs
    pub store: CategoryStore,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Income accumulator (view-local, never persisted)
    pub income: Income,

    /// Focus on the distribution tab
    pub distribution_focus: DistributionFocus,

    /// Focus on the categories tab
    pub categories_focus: CategoriesFocus,

    /// Selected category index in the active list
    pub selected_index: usize,

    /// New-category name input (categories tab)
    pub name_input: TextInput,

    /// Buffer for the active inline edit
    pub edit_input: TextInput,

    /// Inline edit in progress, if any
    pub active_edit: ActiveEdit,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(store: CategoryStore, settings: Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_tab: ActiveTab::default(),
            income: Income::new(),
            distribution_focus: DistributionFocus::default(),
            categories_focus: CategoriesFocus::default(),
            selected_index: 0,
            name_input: TextInput::new().placeholder("New category name"),
            edit_input: TextInput::new(),
            active_edit: ActiveEdit::default(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch to a different tab. Re-render only; no other side effects.
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.end_edit();
            self.clamp_selection();
        }
    }

    /// Whether an inline edit is active
    pub fn is_editing(&self) -> bool {
        self.active_edit != ActiveEdit::None
    }

    /// The currently selected category id, if any
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.store.list().get(self.selected_index).map(|c| c.id)
    }

    /// Move selection up in the category list
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the category list
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after mutations
    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// End any inline edit without further store changes
    pub fn end_edit(&mut self) {
        self.active_edit = ActiveEdit::None;
        self.edit_input.clear();
    }

    /// Begin editing the selected category's percentage
    pub fn begin_percentage_edit(&mut self) {
        if let Some(category) = self.store.list().get(self.selected_index) {
            let initial = if category.percentage > 0.0 {
                format_percentage_input(category.percentage_display())
            } else {
                String::new()
            };
            self.edit_input = TextInput::new().content(initial);
            self.active_edit = ActiveEdit::Percentage(category.id);
        }
    }

    /// Begin renaming the selected category
    pub fn begin_rename_edit(&mut self) {
        if let Some(category) = self.store.list().get(self.selected_index) {
            self.edit_input = TextInput::new().content(category.name.clone());
            self.active_edit = ActiveEdit::Rename(category.id);
        }
    }
}

/// Format a display percentage the way the user would have typed it:
/// no trailing zeros, no trailing decimal point.
pub fn format_percentage_input(display: f64) -> String {
    format!("{}", display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let store = CategoryStore::open(temp_dir.path().join("categories.json"));
        (temp_dir, App::new(store, Settings::default()))
    }

    #[test]
    fn test_initial_tab_is_distribution() {
        let (_temp_dir, app) = test_app();
        assert_eq!(app.active_tab, ActiveTab::Distribution);
    }

    #[test]
    fn test_switch_tab_ends_edit() {
        let (_temp_dir, mut app) = test_app();
        app.store.add("Rent").unwrap();
        app.begin_percentage_edit();
        assert!(app.is_editing());

        app.switch_tab(ActiveTab::Categories);
        assert!(!app.is_editing());
        assert_eq!(app.active_tab, ActiveTab::Categories);
    }

    #[test]
    fn test_selection_bounds() {
        let (_temp_dir, mut app) = test_app();
        app.store.add("Rent").unwrap();
        app.store.add("Food").unwrap();

        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_clamp_selection_after_removal() {
        let (_temp_dir, mut app) = test_app();
        app.store.add("Rent").unwrap();
        let food = app.store.add("Food").unwrap().unwrap();
        app.selected_index = 1;

        app.store.remove(food).unwrap();
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_begin_percentage_edit_preloads_value() {
        let (_temp_dir, mut app) = test_app();
        let id = app.store.add("Rent").unwrap().unwrap();
        app.store.set_percentage(id, 0.5).unwrap();

        app.begin_percentage_edit();
        assert_eq!(app.active_edit, ActiveEdit::Percentage(id));
        assert_eq!(app.edit_input.value(), "50");
    }

    #[test]
    fn test_begin_percentage_edit_zero_is_empty() {
        let (_temp_dir, mut app) = test_app();
        app.store.add("Rent").unwrap();

        app.begin_percentage_edit();
        assert_eq!(app.edit_input.value(), "");
    }

    #[test]
    fn test_begin_rename_edit_preloads_name() {
        let (_temp_dir, mut app) = test_app();
        let id = app.store.add("Rent").unwrap().unwrap();

        app.begin_rename_edit();
        assert_eq!(app.active_edit, ActiveEdit::Rename(id));
        assert_eq!(app.edit_input.value(), "Rent");
    }
}
