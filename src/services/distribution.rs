//! Distribution math
//!
//! Pure derivation of allocated amounts from the current income and category
//! list. Recomputed on every render; there is no hidden state here.

use crate::models::{Category, CategoryId, Money};

/// One category's share of the income
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRow {
    pub id: CategoryId,
    pub name: String,
    /// Decimal fraction as stored (0.25 = 25%)
    pub percentage: f64,
    /// Income × percentage, rounded to whole cents
    pub allocated: Money,
}

/// Derived totals for the distribution view
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSummary {
    pub rows: Vec<AllocationRow>,
    /// Sum of all category fractions
    pub total_percentage: f64,
    /// Income × total percentage
    pub total_allocated: Money,
}

impl DistributionSummary {
    /// Compute the summary from income cents and the category list
    pub fn compute(income_cents: i64, categories: &[Category]) -> Self {
        let income = income_cents as f64 / 100.0;

        let rows = categories
            .iter()
            .map(|c| AllocationRow {
                id: c.id,
                name: c.name.clone(),
                percentage: c.percentage,
                allocated: Money::from_fractional_dollars(income * c.percentage),
            })
            .collect();

        let total_percentage: f64 = categories.iter().map(|c| c.percentage).sum();

        Self {
            rows,
            total_percentage,
            total_allocated: Money::from_fractional_dollars(income * total_percentage),
        }
    }

    /// True when the summed percentages exceed 100% of income
    pub fn is_over_allocated(&self) -> bool {
        self.total_percentage > 1.0
    }

    /// Total percentage as the user-facing figure ("110.00" for 1.1)
    pub fn total_percentage_display(&self) -> f64 {
        self.total_percentage * 100.0
    }
}
