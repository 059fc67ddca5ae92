//! CLI command handlers

pub mod category;

pub use category::{handle_category_command, CategoryCommands};
