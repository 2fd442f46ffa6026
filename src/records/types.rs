//! Core data types for the healthcare record table
//!
//! - `Record`: one patient admission with its billing amount
//! - `YearMonth`: calendar month bucket derived from the admission date
//! - `RecordTable`: the immutable, in-memory collection of records
//! - `CategoryField`: the categorical columns a filter can target

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar date truncated to year and month
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Truncate a date to its month bucket
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A single patient admission row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub gender: String,
    pub age: u32,
    pub medical_condition: String,
    pub insurance_provider: String,
    /// `None` when the source value was not a finite number
    pub billing_amount: Option<f64>,
    pub date_of_admission: NaiveDate,
    /// Always `YearMonth::from_date(date_of_admission)`
    pub year_month: YearMonth,
}

impl Record {
    pub fn new(
        gender: impl Into<String>,
        age: u32,
        medical_condition: impl Into<String>,
        insurance_provider: impl Into<String>,
        billing_amount: Option<f64>,
        date_of_admission: NaiveDate,
    ) -> Self {
        Self {
            gender: gender.into(),
            age,
            medical_condition: medical_condition.into(),
            insurance_provider: insurance_provider.into(),
            billing_amount,
            date_of_admission,
            year_month: YearMonth::from_date(date_of_admission),
        }
    }

    /// Value of a categorical column
    pub fn category(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Gender => &self.gender,
            CategoryField::MedicalCondition => &self.medical_condition,
            CategoryField::InsuranceProvider => &self.insurance_provider,
        }
    }
}

/// Categorical columns of the record table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryField {
    Gender,
    MedicalCondition,
    InsuranceProvider,
}

impl CategoryField {
    /// Column header as it appears in the source file
    pub fn column_name(&self) -> &'static str {
        match self {
            CategoryField::Gender => "Gender",
            CategoryField::MedicalCondition => "Medical Condition",
            CategoryField::InsuranceProvider => "Insurance Provider",
        }
    }
}

/// The loaded record table
///
/// Constructed once at startup and never mutated afterwards; share it
/// behind an `Arc` and pass it explicitly to every transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Rows whose `field` equals `value` exactly
    ///
    /// `None` and the empty string both mean "no filter" and select every row.
    pub fn select(&self, field: CategoryField, value: Option<&str>) -> Vec<&Record> {
        match value.filter(|v| !v.is_empty()) {
            Some(wanted) => self
                .records
                .iter()
                .filter(|r| r.category(field) == wanted)
                .collect(),
            None => self.records.iter().collect(),
        }
    }

    /// Distinct values of a categorical column in first-appearance order
    pub fn distinct(&self, field: CategoryField) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|r| r.category(field))
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }

    /// All non-missing billing amounts, in row order
    pub fn billing_amounts(&self) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.billing_amount).collect()
    }

    /// Number of rows whose billing amount is missing
    pub fn missing_billing_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.billing_amount.is_none())
            .count()
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
