//! Category model
//!
//! A category is a named budget bucket holding a fractional share of income.
//! Percentages are stored as decimal fractions (0.25 means 25%) and are never
//! clamped; only the aggregate over 100% is flagged, and only in the UI.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A budget category with an allocated share of income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned at creation, immutable
    pub id: CategoryId,

    /// Category name (free text, no uniqueness constraint)
    pub name: String,

    /// Share of income as a decimal fraction (0.25 = 25%)
    #[serde(default)]
    pub percentage: f64,
}

impl Category {
    /// Create a new category with percentage 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            percentage: 0.0,
        }
    }

    /// The percentage as the user entered it (25.0 for a stored 0.25)
    pub fn percentage_display(&self) -> f64 {
        self.percentage * 100.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check whether text is a valid partial percentage entry: digits with at
/// most one decimal point, or empty. Anything else must be rejected without
/// mutating the field.
pub fn is_percentage_text(text: &str) -> bool {
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Parse a user-entered percentage string into a stored decimal fraction.
///
/// "25" becomes 0.25. Empty or unparsable input becomes 0.
pub fn parse_percentage_input(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => v / 100.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Rent");
        assert_eq!(category.name, "Rent");
        assert_eq!(category.percentage, 0.0);
    }

    #[test]
    fn test_percentage_display() {
        let mut category = Category::new("Rent");
        category.percentage = 0.5;
        assert_eq!(category.percentage_display(), 50.0);
    }

    #[test]
    fn test_is_percentage_text() {
        assert!(is_percentage_text(""));
        assert!(is_percentage_text("25"));
        assert!(is_percentage_text("12.5"));
        assert!(is_percentage_text("."));
        assert!(is_percentage_text("0.25"));
        assert!(!is_percentage_text("1.2.3"));
        assert!(!is_percentage_text("-5"));
        assert!(!is_percentage_text("12a"));
        assert!(!is_percentage_text("25%"));
    }

    #[test]
    fn test_parse_percentage_input() {
        assert_eq!(parse_percentage_input("25"), 0.25);
        assert_eq!(parse_percentage_input("50"), 0.5);
        assert_eq!(parse_percentage_input("12.5"), 0.125);
        assert_eq!(parse_percentage_input(""), 0.0);
        assert_eq!(parse_percentage_input("."), 0.0);
        // Over 100% is stored as entered; only the aggregate is flagged
        assert_eq!(parse_percentage_input("150"), 1.5);
    }

    #[test]
    fn test_serialization() {
        let mut category = Category::new("Food");
        category.percentage = 0.6;

        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }

    #[test]
    fn test_missing_percentage_defaults_to_zero() {
        let json = format!(
            r#"{{"id": "{}", "name": "Rent"}}"#,
            uuid::Uuid::new_v4()
        );
        let category: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category.percentage, 0.0);
    }
}
