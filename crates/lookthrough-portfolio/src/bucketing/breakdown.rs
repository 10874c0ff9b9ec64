//! Ordered category-to-value breakdowns.

use serde::Serialize;
use std::collections::HashMap;

use crate::types::Dimension;

/// One category of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    /// Category name.
    pub category: String,
    /// Accumulated market value.
    pub value: f64,
}

/// Market value by category along one dimension.
///
/// Categories keep the order in which they first received a contribution.
/// Values are plain `f64` sums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    /// Dimension this breakdown classifies by.
    pub dimension: Dimension,

    /// Categories in first-contribution order.
    entries: Vec<BreakdownEntry>,

    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl Breakdown {
    /// Creates an empty breakdown.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Adds `amount` to `category`, creating the category if needed.
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.positions.get(category) {
            Some(&i) => self.entries[i].value += amount,
            None => {
                self.positions.insert(category.to_string(), self.entries.len());
                self.entries.push(BreakdownEntry {
                    category: category.to_string(),
                    value: amount,
                });
            }
        }
    }

    /// Entries in first-contribution order.
    #[must_use]
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    /// Returns the value of a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.positions.get(category).map(|&i| self.entries[i].value)
    }

    /// Sum over all categories.
    ///
    /// For ETFs whose allocation weights do not sum to 100 this differs from
    /// the portfolio's total market value.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, e| acc + e.value)
    }

    /// Share of a category in the breakdown total, in percent.
    #[must_use]
    pub fn share_pct(&self, category: &str) -> Option<f64> {
        let total = self.total();
        self.get(category)
            .map(|v| if total == 0.0 { 0.0 } else { v / total * 100.0 })
    }

    /// Category names in first-contribution order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Entries sorted by value descending; ties keep insertion order.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<&BreakdownEntry> {
        let mut result: Vec<_> = self.entries.iter().collect();
        result.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        result
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no category received a contribution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
