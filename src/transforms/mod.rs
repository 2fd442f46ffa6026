//! Dashboard Transforms
//!
//! Pure functions from the immutable record table plus control values to
//! chart-ready structures:
//!
//! - **age**: age histogram split by gender
//! - **condition**: medical condition shares
//! - **insurance**: mean billing per provider and condition
//! - **billing**: billing histogram under a threshold
//! - **trends**: monthly admission counts
//!
//! Shared helpers live in **histogram** (equal-width binning) and **stats**
//! (mean, median, quantiles). No transform holds state between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use healthdash::transforms::{age_distribution, billing_distribution};
//!
//! let ages = age_distribution(&table, Some("Female"));
//! let billing = billing_distribution(&table, None, 25_000.0);
//! println!("{} billed rows under threshold", billing.total());
//! ```

pub mod age;
pub mod billing;
pub mod condition;
pub mod histogram;
pub mod insurance;
pub mod stats;
pub mod trends;

pub use age::{age_distribution, age_distribution_with_bins};
pub use billing::{billing_distribution, billing_distribution_with_bins, BILLING_SERIES};
pub use condition::{condition_distribution, CategoryCount, CategoryShares};
pub use histogram::{Histogram, HistogramSeries, DEFAULT_BINS};
pub use insurance::{insurance_comparison, GroupSeries, GroupedMeans};
pub use trends::{admission_trends, TrendPoint, TrendSeries};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::records::{parse_date, Record, RecordTable};

    pub fn record(
        gender: &str,
        age: u32,
        condition: &str,
        provider: &str,
        billing: Option<f64>,
        date: &str,
    ) -> Record {
        Record::new(
            gender,
            age,
            condition,
            provider,
            billing,
            parse_date(date).unwrap(),
        )
    }

    /// A dozen admissions spread across genders, providers and months
    pub fn sample_table() -> RecordTable {
        RecordTable::new(vec![
            record("Female", 34, "Diabetes", "Aetna", Some(18_856.28), "2021-03-05"),
            record("Male", 62, "Asthma", "Cigna", Some(33_643.33), "2020-11-18"),
            record("Female", 76, "Obesity", "Medicare", Some(27_955.10), "2022-09-19"),
            record("Male", 28, "Diabetes", "Medicare", None, "2021-03-20"),
            record("Female", 43, "Cancer", "Aetna", Some(14_238.32), "2020-01-01"),
            record("Male", 36, "Asthma", "Aetna", Some(48_145.11), "2021-07-22"),
            record("Female", 55, "Diabetes", "Cigna", Some(2_650.71), "2022-01-04"),
            record("Male", 81, "Cancer", "Cigna", Some(-502.51), "2021-07-02"),
            record("Female", 19, "Asthma", "Medicare", Some(5_214.00), "2020-11-02"),
            record("Male", 47, "Diabetes", "Aetna", Some(40_701.60), "2022-09-30"),
            record("Female", 66, "Obesity", "Cigna", None, "2021-12-12"),
            record("Male", 52, "Diabetes", "Medicare", Some(12_576.80), "2020-01-15"),
        ])
    }
}
