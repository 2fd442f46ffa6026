//! Monthly admission counts

use crate::records::{CategoryField, RecordTable, YearMonth};
use serde::Serialize;
use std::collections::BTreeMap;

/// Admissions in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period: YearMonth,
    /// `YYYY-MM`
    pub label: String,
    pub count: usize,
}

/// Admission counts ordered chronologically
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.count).collect()
    }

    pub fn total(&self) -> usize {
        self.points.iter().map(|p| p.count).sum()
    }
}

/// Count admissions per Year-Month bucket, oldest first
pub fn admission_trends(table: &RecordTable, condition: Option<&str>) -> TrendSeries {
    let mut buckets: BTreeMap<YearMonth, usize> = BTreeMap::new();
    for record in table.select(CategoryField::MedicalCondition, condition) {
        *buckets.entry(record.year_month).or_default() += 1;
    }

    TrendSeries {
        points: buckets
            .into_iter()
            .map(|(period, count)| TrendPoint {
                period,
                label: period.to_string(),
                count,
            })
            .collect(),
    }
}
