//! Medical condition distribution

use crate::records::{CategoryField, RecordTable};
use serde::Serialize;

/// Row count for one category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// A partition of rows by category, largest first
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoryShares {
    pub slices: Vec<CategoryCount>,
    pub total: usize,
}

impl CategoryShares {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, label: &str) -> usize {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    /// Proportion of rows in `label`, in `[0, 1]`
    pub fn share(&self, label: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(label) as f64 / self.total as f64
    }
}

/// Count rows per medical condition after the gender filter
pub fn condition_distribution(table: &RecordTable, gender: Option<&str>) -> CategoryShares {
    let rows = table.select(CategoryField::Gender, gender);

    let mut slices: Vec<CategoryCount> = Vec::new();
    for record in &rows {
        match slices
            .iter_mut()
            .find(|s| s.label == record.medical_condition)
        {
            Some(slice) => slice.count += 1,
            None => slices.push(CategoryCount {
                label: record.medical_condition.clone(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-appearance order among ties
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    CategoryShares {
        slices,
        total: rows.len(),
    }
}
