//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label used for the grand-total entry in spending breakdowns.
/// Distinct from every seeded category name.
pub const TOTAL_LABEL: &str = "Всего";

/// Number of slots in a budget curve: slot 0 is the start-of-month baseline,
/// slots 1..=31 are days of the month.
pub const CURVE_SLOTS: usize = 32;

/// A named spending bucket with aliases for free-text matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Stable short identifier, primary key
    pub id: String,
    /// Canonical display name
    pub name: String,
    /// Marks essential, non-discretionary spending (reporting only)
    pub is_base_expenses: bool,
    /// Lowercase strings matched against parsed category text
    pub aliases: Vec<String>,
}

impl Category {
    /// Whether already-lowercased free text names this category.
    ///
    /// Canonical names are stored mixed-case and compared case-insensitively;
    /// aliases are stored lowercase and compared as-is.
    pub fn matches(&self, text: &str) -> bool {
        self.name.to_lowercase() == text || self.aliases.iter().any(|alias| alias == text)
    }
}

/// A single logged expense; never mutated in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Store-generated UUID
    pub id: String,
    /// Creation timestamp, UTC
    pub date: DateTime<Utc>,
    pub category_id: String,
    /// Smallest currency unit, always positive
    pub amount: i64,
    /// Original message text, kept for auditing
    pub raw_text: String,
}

/// An expense to be inserted (before the store assigns its id)
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Defaults to now when `None`; set to backdate an entry
    pub date: Option<DateTime<Utc>>,
    pub category_id: String,
    pub amount: i64,
    pub raw_text: String,
}

/// One labeled total in a spending breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub total: i64,
}

/// Ordered category totals for one reporting window
///
/// Insertion order is presentation order: the optional grand-total entry
/// first, then categories descending by spend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpendingBreakdown {
    pub entries: Vec<BreakdownEntry>,
}

impl SpendingBreakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as one `"<label>: <total>"` line per entry
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.total))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Daily and monthly budget targets, in the smallest currency unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub daily: i64,
    pub monthly: i64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            daily: 1000,
            monthly: 31000,
        }
    }
}

impl BudgetConfig {
    /// Value-axis bounds handed to the chart collaborator
    pub fn value_axis(&self) -> (i64, i64) {
        (0, self.monthly)
    }
}

/// Planned vs cumulative actual spend over a month
///
/// Two parallel sequences of [`CURVE_SLOTS`] entries, ready for a line-chart
/// collaborator. Slots past the month's last day carry the final cumulative
/// value forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCurve {
    pub planned: Vec<i64>,
    pub actual: Vec<i64>,
}

impl BudgetCurve {
    /// Day-of-month axis bounds handed to the chart collaborator
    pub fn day_axis() -> (i64, i64) {
        (0, (CURVE_SLOTS - 1) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matches_name_case_insensitively() {
        let category = Category {
            id: "coffee".to_string(),
            name: "Кофе".to_string(),
            is_base_expenses: false,
            aliases: vec!["coffee".to_string()],
        };
        assert!(category.matches("кофе"));
        assert!(category.matches("coffee"));
        assert!(!category.matches("tea"));
    }

    #[test]
    fn test_breakdown_to_text_keeps_order() {
        let breakdown = SpendingBreakdown {
            entries: vec![
                BreakdownEntry {
                    label: TOTAL_LABEL.to_string(),
                    total: 350,
                },
                BreakdownEntry {
                    label: "Дом, покупки".to_string(),
                    total: 300,
                },
                BreakdownEntry {
                    label: "Кофе".to_string(),
                    total: 50,
                },
            ],
        };
        assert_eq!(
            breakdown.to_text(),
            "Всего: 350\nДом, покупки: 300\nКофе: 50"
        );
    }

    #[test]
    fn test_budget_axis_bounds() {
        assert_eq!(BudgetCurve::day_axis(), (0, 31));
        assert_eq!(BudgetConfig::default().value_axis(), (0, 31000));
    }
}
