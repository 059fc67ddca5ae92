//! Event handler for the TUI
//!
//! Routes keyboard events based on the active tab, the focused element, and
//! any inline edit in progress. Every mutation goes through the category
//! store, which persists synchronously, so each handler completes its full
//! state transition before the next event is processed.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{is_percentage_text, parse_percentage_input};

use super::app::{ActiveEdit, ActiveTab, App, CategoriesFocus, DistributionFocus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits from anywhere, including text fields
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.is_editing() {
        return handle_edit_key(app, key);
    }

    // Tab selection works wherever plain text isn't being typed
    if key.code == KeyCode::Tab {
        let next = match app.active_tab {
            ActiveTab::Distribution => ActiveTab::Categories,
            ActiveTab::Categories => ActiveTab::Distribution,
        };
        app.switch_tab(next);
        return Ok(());
    }

    match app.active_tab {
        ActiveTab::Distribution => handle_distribution_key(app, key),
        ActiveTab::Categories => handle_categories_key(app, key),
    }
}

/// Handle keys on the distribution tab
fn handle_distribution_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.distribution_focus {
        DistributionFocus::Income => handle_income_key(app, key),
        DistributionFocus::List => handle_distribution_list_key(app, key),
    }
}

/// Handle keys while the income field is focused.
///
/// The field is a read-only display over a cent accumulator: digits append,
/// backspace drops the last digit, escape clears. Everything else leaves the
/// accumulator untouched.
fn handle_income_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => {
            app.income.push_digit(c as u8 - b'0');
        }
        KeyCode::Backspace => {
            app.income.backspace();
        }
        KeyCode::Esc => {
            app.income.clear();
        }
        KeyCode::Char('q') => {
            app.quit();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if !app.store.is_empty() {
                app.distribution_focus = DistributionFocus::List;
                app.clamp_selection();
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while the distribution category list is focused
fn handle_distribution_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.selected_index == 0 {
                app.distribution_focus = DistributionFocus::Income;
            } else {
                app.move_up();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            app.begin_percentage_edit();
        }
        KeyCode::Esc => {
            app.distribution_focus = DistributionFocus::Income;
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys on the categories tab
fn handle_categories_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.categories_focus {
        CategoriesFocus::NameInput => handle_name_input_key(app, key),
        CategoriesFocus::List => handle_categories_list_key(app, key),
    }
}

/// Handle keys while the new-category name field is focused
fn handle_name_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let name = app.name_input.value().to_string();
            if let Some(id) = app.store.add(&name)? {
                app.name_input.clear();
                if let Some(category) = app.store.get(id) {
                    app.set_status(format!("Added '{}'", category.name));
                }
            }
        }
        KeyCode::Char(c) => {
            app.name_input.insert(c);
        }
        KeyCode::Backspace => {
            app.name_input.backspace();
        }
        KeyCode::Left => {
            app.name_input.move_left();
        }
        KeyCode::Right => {
            app.name_input.move_right();
        }
        KeyCode::Esc => {
            app.name_input.clear();
        }
        KeyCode::Down => {
            if !app.store.is_empty() {
                app.categories_focus = CategoriesFocus::List;
                app.clamp_selection();
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while the category management list is focused
fn handle_categories_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.selected_index == 0 {
                app.categories_focus = CategoriesFocus::NameInput;
            } else {
                app.move_up();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            app.begin_rename_edit();
        }
        // Delete is immediate, no confirmation step
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_category() {
                let name = app.store.get(id).map(|c| c.name.clone()).unwrap_or_default();
                app.store.remove(id)?;
                app.clamp_selection();
                if app.store.is_empty() {
                    app.categories_focus = CategoriesFocus::NameInput;
                }
                app.set_status(format!("Deleted '{}'", name));
            }
        }
        KeyCode::Esc => {
            app.categories_focus = CategoriesFocus::NameInput;
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while an inline edit is active.
///
/// Edits commit to the store on every change, matching the live-update
/// behavior of the two views; Enter and Esc only end the edit.
fn handle_edit_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let edit = app.active_edit.clone();

    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.end_edit();
            return Ok(());
        }
        KeyCode::Left => {
            app.edit_input.move_left();
            return Ok(());
        }
        KeyCode::Right => {
            app.edit_input.move_right();
            return Ok(());
        }
        _ => {}
    }

    match edit {
        ActiveEdit::Percentage(id) => {
            match key.code {
                KeyCode::Char(c) => {
                    // Non-conforming characters are rejected without mutating
                    // either the buffer or the store
                    if is_percentage_text(&app.edit_input.preview_insert(c)) {
                        app.edit_input.insert(c);
                        app.store
                            .set_percentage(id, parse_percentage_input(app.edit_input.value()))?;
                    }
                }
                KeyCode::Backspace => {
                    app.edit_input.backspace();
                    app.store
                        .set_percentage(id, parse_percentage_input(app.edit_input.value()))?;
                }
                _ => {}
            }
        }
        ActiveEdit::Rename(id) => {
            match key.code {
                KeyCode::Char(c) => {
                    app.edit_input.insert(c);
                    app.store.rename(id, app.edit_input.value())?;
                }
                KeyCode::Backspace => {
                    app.edit_input.backspace();
                    app.store.rename(id, app.edit_input.value())?;
                }
                _ => {}
            }
        }
        ActiveEdit::None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::CategoryStore;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let store = CategoryStore::open(temp_dir.path().join("categories.json"));
        (temp_dir, App::new(store, Settings::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::from(code)).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_income_digits() {
        let (_temp_dir, mut app) = test_app();
        type_str(&mut app, "15000");
        assert_eq!(app.income.cents(), 15000);
    }

    #[test]
    fn test_income_backspace_and_escape() {
        let (_temp_dir, mut app) = test_app();
        type_str(&mut app, "15000");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.income.cents(), 1500);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.income.cents(), 0);
    }

    #[test]
    fn test_income_ignores_other_keys() {
        let (_temp_dir, mut app) = test_app();
        type_str(&mut app, "150");
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('.'));
        assert_eq!(app.income.cents(), 150);
    }

    #[test]
    fn test_tab_key_switches_tabs() {
        let (_temp_dir, mut app) = test_app();
        assert_eq!(app.active_tab, ActiveTab::Distribution);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, ActiveTab::Categories);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, ActiveTab::Distribution);
    }

    #[test]
    fn test_add_category_via_name_input() {
        let (_temp_dir, mut app) = test_app();
        app.switch_tab(ActiveTab::Categories);

        type_str(&mut app, "Rent");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.list()[0].name, "Rent");
        // Input is cleared after a successful add
        assert_eq!(app.name_input.value(), "");
    }

    #[test]
    fn test_add_whitespace_name_is_noop() {
        let (_temp_dir, mut app) = test_app();
        app.switch_tab(ActiveTab::Categories);

        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.store.is_empty());
    }

    #[test]
    fn test_percentage_edit_live_commit() {
        let (_temp_dir, mut app) = test_app();
        let id = app.store.add("Rent").unwrap().unwrap();
        app.distribution_focus = DistributionFocus::List;

        press(&mut app, KeyCode::Enter); // begin edit
        type_str(&mut app, "50");
        assert_eq!(app.store.get(id).unwrap().percentage, 0.5);

        press(&mut app, KeyCode::Enter); // end edit
        assert!(!app.is_editing());
        assert_eq!(app.store.get(id).unwrap().percentage, 0.5);
    }

    #[test]
    fn test_percentage_edit_rejects_bad_chars() {
        let (_temp_dir, mut app) = test_app();
        let id = app.store.add("Rent").unwrap().unwrap();
        app.distribution_focus = DistributionFocus::List;

        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "12.5");
        press(&mut app, KeyCode::Char('x')); // rejected
        press(&mut app, KeyCode::Char('.')); // second dot, rejected

        assert_eq!(app.edit_input.value(), "12.5");
        assert_eq!(app.store.get(id).unwrap().percentage, 0.125);
    }

    #[test]
    fn test_percentage_edit_empty_commits_zero() {
        let (_temp_dir, mut app) = test_app();
        let id = app.store.add("Rent").unwrap().unwrap();
        app.store.set_percentage(id, 0.5).unwrap();
        app.distribution_focus = DistributionFocus::List;

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.edit_input.value(), "");
        assert_eq!(app.store.get(id).unwrap().percentage, 0.0);
    }

    #[test]
    fn test_rename_live_commit() {
        let (_temp_dir, mut app) = test_app();
        let id = app.store.add("Rent").unwrap().unwrap();
        app.switch_tab(ActiveTab::Categories);
        app.categories_focus = CategoriesFocus::List;

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.store.get(id).unwrap().name, "Rents");
    }

    #[test]
    fn test_delete_selected_category() {
        let (_temp_dir, mut app) = test_app();
        app.store.add("Rent").unwrap();
        app.store.add("Food").unwrap();
        app.switch_tab(ActiveTab::Categories);
        app.categories_focus = CategoriesFocus::List;
        app.selected_index = 1;

        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.list()[0].name, "Rent");
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_quit_key() {
        let (_temp_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_q_in_name_input_does_not_quit() {
        let (_temp_dir, mut app) = test_app();
        app.switch_tab(ActiveTab::Categories);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.name_input.value(), "q");
    }
}
