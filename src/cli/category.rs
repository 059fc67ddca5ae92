//! Category CLI commands
//!
//! Scripted access to the same category store the TUI uses. Categories are
//! addressed by name (first match) or by id prefix.

use clap::Subcommand;

use crate::error::{DivvyError, DivvyResult};
use crate::models::{parse_percentage_input, Category, CategoryId};
use crate::storage::CategoryStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories in display order
    List,

    /// Add a new category (percentage starts at 0)
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        name: String,
    },

    /// Set a category's percentage (entered as e.g. "25" for 25%)
    Set {
        /// Category name or ID
        category: String,
        /// Percentage of income
        percentage: String,
    },

    /// Remove a category
    Remove {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &mut CategoryStore, cmd: CategoryCommands) -> DivvyResult<()> {
    match cmd {
        CategoryCommands::List => {
            if store.is_empty() {
                println!("No categories. Run 'divvy category add <name>' to create one.");
            } else {
                for category in store.list() {
                    println!(
                        "{}  {:<24} {:>7.2}%",
                        category.id,
                        category.name,
                        category.percentage_display()
                    );
                }
            }
        }

        CategoryCommands::Add { name } => match store.add(&name)? {
            Some(id) => {
                println!("Added category: {}", name.trim());
                println!("  ID: {}", id);
            }
            None => println!("Category name is empty; nothing added."),
        },

        CategoryCommands::Rename { category, name } => {
            let id = find_category(store, &category)?;
            store.rename(id, &name)?;
            println!("Renamed category to '{}'", name);
        }

        CategoryCommands::Set {
            category,
            percentage,
        } => {
            let id = find_category(store, &category)?;
            let fraction = parse_percentage_input(percentage.trim());
            store.set_percentage(id, fraction)?;
            println!("Set percentage to {:.2}%", fraction * 100.0);
        }

        CategoryCommands::Remove { category } => {
            let id = find_category(store, &category)?;
            let name = store.get(id).map(|c| c.name.clone()).unwrap_or_default();
            store.remove(id)?;
            println!("Removed category '{}'", name);
        }
    }

    Ok(())
}

/// Resolve a name or id-prefix argument to a category id
fn find_category(store: &CategoryStore, query: &str) -> DivvyResult<CategoryId> {
    let by_name = store.list().iter().find(|c| c.name == query);
    let matches = |c: &&Category| c.id.to_string() == query || c.id.as_uuid().to_string() == query;

    by_name
        .or_else(|| store.list().iter().find(matches))
        .map(|c| c.id)
        .ok_or_else(|| DivvyError::category_not_found(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(names: &[&str]) -> (TempDir, CategoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CategoryStore::open(temp_dir.path().join("categories.json"));
        for name in names {
            store.add(name).unwrap();
        }
        (temp_dir, store)
    }

    #[test]
    fn test_find_by_name() {
        let (_temp_dir, store) = store_with(&["Rent", "Food"]);
        let id = find_category(&store, "Food").unwrap();
        assert_eq!(store.get(id).unwrap().name, "Food");
    }

    #[test]
    fn test_find_by_id_prefix() {
        let (_temp_dir, store) = store_with(&["Rent"]);
        let id = store.list()[0].id;
        assert_eq!(find_category(&store, &id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let (_temp_dir, store) = store_with(&["Rent"]);
        let err = find_category(&store, "Nope").unwrap_err();
        assert!(err.is_not_found());
    }
}
