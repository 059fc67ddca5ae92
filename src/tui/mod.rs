//! Terminal User Interface module
//!
//! Two-tab TUI built on ratatui: the distribution calculator and the
//! category management list, both over the same category store.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
