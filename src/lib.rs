//! divvy - Terminal-based budget-splitting calculator
//!
//! Enter a periodic income figure and distribute it across user-defined
//! percentage categories, with totals recomputed live. Two tabs: the
//! distribution calculator and category management, both backed by the same
//! persisted category list.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, money, the income accumulator)
//! - `storage`: JSON file storage layer
//! - `services`: Distribution math
//! - `cli`: Scripted category management commands
//! - `tui`: The interactive interface

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{DivvyError, DivvyResult};
