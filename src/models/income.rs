//! Income digit accumulator
//!
//! The income field is a read-only display driven by raw keystrokes: digits
//! append, backspace drops the last digit, escape clears. State is a single
//! cents counter, view-local and never persisted.

use super::money::Money;

/// Maximum value in cents; the decimal dollar value never exceeds 999,999,999
pub const INCOME_CAP_CENTS: i64 = 99_999_999_900;

/// Cent accumulator for the income field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Income {
    cents: i64,
}

impl Income {
    /// Create a new accumulator at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value in cents
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Current value as Money
    pub fn as_money(&self) -> Money {
        Money::from_cents(self.cents)
    }

    /// Current value as fractional dollars
    pub fn as_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Append a digit. A digit whose result would exceed the cap is ignored.
    pub fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        let next = self.cents * 10 + digit as i64;
        if next <= INCOME_CAP_CENTS {
            self.cents = next;
        }
    }

    /// Drop the last digit (integer floor-divide by 10)
    pub fn backspace(&mut self) {
        self.cents /= 10;
    }

    /// Reset to zero
    pub fn clear(&mut self) {
        self.cents = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(income: &mut Income, digits: &[u8]) {
        for &d in digits {
            income.push_digit(d);
        }
    }

    #[test]
    fn test_digit_accumulation() {
        let mut income = Income::new();
        type_digits(&mut income, &[1, 5, 0, 0, 0]);
        assert_eq!(income.cents(), 15000);
        assert_eq!(income.as_dollars(), 150.0);
        assert_eq!(income.as_money().to_string(), "$150.00");
    }

    #[test]
    fn test_backspace_removes_last_digit() {
        let mut income = Income::new();
        type_digits(&mut income, &[1, 5, 0, 0, 0]);
        income.backspace();
        assert_eq!(income.cents(), 1500);
        income.backspace();
        assert_eq!(income.cents(), 150);
    }

    #[test]
    fn test_backspace_at_zero() {
        let mut income = Income::new();
        income.backspace();
        assert_eq!(income.cents(), 0);
    }

    #[test]
    fn test_clear() {
        let mut income = Income::new();
        type_digits(&mut income, &[9, 9, 9]);
        income.clear();
        assert_eq!(income.cents(), 0);
    }

    #[test]
    fn test_cap_rejects_digit() {
        let mut income = Income::new();
        for _ in 0..10 {
            income.push_digit(9);
        }
        assert_eq!(income.cents(), 9_999_999_999);
        // 99,999,999,999 would exceed the cap, so the keystroke is ignored
        income.push_digit(9);
        assert_eq!(income.cents(), 9_999_999_999);
    }

    #[test]
    fn test_cap_boundary() {
        let mut income = Income::new();
        // Exactly the cap: $999,999,999.00
        for &d in &[9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0] {
            income.push_digit(d);
        }
        assert_eq!(income.cents(), INCOME_CAP_CENTS);
        // One more digit would exceed it
        income.push_digit(0);
        assert_eq!(income.cents(), INCOME_CAP_CENTS);
    }

    #[test]
    fn test_leading_zeros_are_inert() {
        let mut income = Income::new();
        type_digits(&mut income, &[0, 0, 5]);
        assert_eq!(income.cents(), 5);
        assert_eq!(income.as_money().to_string(), "$0.05");
    }
}
