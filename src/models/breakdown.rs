//! Ordered cost breakdown
//!
//! Maps category names to amounts while keeping insertion order. Inserting an
//! existing name replaces its amount in place, so the first occurrence decides
//! the position.

use serde::{Deserialize, Serialize};

/// One named line item of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub category: String,
    pub amount: f64,
}

/// Ordered mapping from category name to cost
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostBreakdown {
    lines: Vec<CostLine>,
}

impl CostBreakdown {
    /// Create an empty breakdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the amount for a category, replacing any previous amount
    ///
    /// Returns the replaced amount if the category already existed.
    pub fn insert(&mut self, category: impl Into<String>, amount: f64) -> Option<f64> {
        let category = category.into();
        match self.lines.iter_mut().find(|line| line.category == category) {
            Some(line) => Some(std::mem::replace(&mut line.amount, amount)),
            None => {
                self.lines.push(CostLine { category, amount });
                None
            }
        }
    }

    /// Merge another breakdown into this one; later entries win
    pub fn merge(&mut self, other: CostBreakdown) {
        for line in other.lines {
            self.insert(line.category, line.amount);
        }
    }

    /// Amount for a category
    pub fn get(&self, category: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
    }

    /// Check whether a category is present
    pub fn contains(&self, category: &str) -> bool {
        self.lines.iter().any(|line| line.category == category)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the breakdown has no categories
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over line items in order
    pub fn iter(&self) -> impl Iterator<Item = &CostLine> {
        self.lines.iter()
    }

    /// Category names in order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.category.as_str())
    }

    /// Amounts in order
    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(|line| line.amount)
    }

    /// Sum of all amounts
    pub fn total(&self) -> f64 {
        self.amounts().sum()
    }

    /// Apply a function to every amount, keeping names and order
    pub fn map_amounts<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| CostLine {
                    category: line.category.clone(),
                    amount: f(line.amount),
                })
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CostBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut breakdown = Self::new();
        for (category, amount) in iter {
            breakdown.insert(category, amount);
        }
        breakdown
    }
}

impl IntoIterator for CostBreakdown {
    type Item = CostLine;
    type IntoIter = std::vec::IntoIter<CostLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
