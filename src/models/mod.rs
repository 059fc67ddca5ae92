//! Core data models for divvy
//!
//! The category records being split, the money type, and the income
//! digit accumulator.

pub mod category;
pub mod ids;
pub mod income;
pub mod money;

pub use category::{is_percentage_text, parse_percentage_input, Category};
pub use ids::CategoryId;
pub use income::Income;
pub use money::Money;
