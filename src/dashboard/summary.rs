//! Dataset summary
//!
//! Figures computed once from the loaded table: headline statistics, the
//! dropdown options and the billing slider domain.

use crate::records::{CategoryField, RecordTable};
use crate::transforms::stats;
use serde::Serialize;

/// Quantiles shown as slider tick marks
const MARK_QUANTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A labelled tick on the billing slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    /// Quantile value truncated toward zero
    pub value: i64,
    /// e.g. `$12,345`
    pub label: String,
}

/// Domain and initial value of the billing threshold slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingSlider {
    pub min: f64,
    pub max: f64,
    /// Initial threshold: the median billing amount
    pub value: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
}

impl BillingSlider {
    /// Build the slider over all non-missing billing amounts
    ///
    /// Returns `None` when there are no valid amounts.
    pub fn from_amounts(amounts: &[f64], step: f64) -> Option<Self> {
        let (min, max) = stats::min_max(amounts)?;
        let value = stats::median(amounts)?;

        let mut marks: Vec<SliderMark> = Vec::new();
        for q in stats::quantiles(amounts, &MARK_QUANTILES)? {
            let value = q.trunc() as i64;
            if marks.iter().all(|m| m.value != value) {
                marks.push(SliderMark {
                    value,
                    label: format!("${}", group_thousands(value)),
                });
            }
        }

        Some(Self {
            min,
            max,
            value,
            step,
            marks,
        })
    }

    pub fn contains(&self, threshold: f64) -> bool {
        threshold >= self.min && threshold <= self.max
    }
}

/// Headline figures and control options for the loaded table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub missing_billing: usize,
    pub average_billing: Option<f64>,
    /// Average formatted with thousands separators and two decimals
    pub average_billing_display: Option<String>,
    pub gender_options: Vec<String>,
    pub condition_options: Vec<String>,
    pub billing_slider: Option<BillingSlider>,
}

impl DatasetSummary {
    pub fn from_table(table: &RecordTable, slider_step: f64) -> Self {
        let amounts = table.billing_amounts();
        let average_billing = stats::mean(&amounts);

        Self {
            total_records: table.len(),
            missing_billing: table.len() - amounts.len(),
            average_billing,
            average_billing_display: average_billing.map(|avg| format_thousands(avg, 2)),
            gender_options: table.distinct(CategoryField::Gender),
            condition_options: table.distinct(CategoryField::MedicalCondition),
            billing_slider: BillingSlider::from_amounts(&amounts, slider_step),
        }
    }

    /// Threshold used when a request does not carry one
    pub fn default_threshold(&self) -> Option<f64> {
        self.billing_slider.as_ref().map(|s| s.value)
    }
}

/// Format a number with `,` thousands separators and fixed decimals
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&insert_commas(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    if value < 0 {
        format!("-{}", insert_commas(&digits))
    } else {
        insert_commas(&digits)
    }
}

fn insert_commas(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::test_support::sample_table;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(25539.316097, 2), "25,539.32");
        assert_eq!(format_thousands(999.999, 2), "1,000.00");
        assert_eq!(format_thousands(12.4, 0), "12");
        assert_eq!(format_thousands(-1234567.0, 1), "-1,234,567.0");
        assert_eq!(format_thousands(0.0, 2), "0.00");
    }

    #[test]
    fn test_slider_marks() {
        let amounts = [1_000.0, 2_500.5, 10_000.0, 52_764.9, 52_764.2];
        let slider = BillingSlider::from_amounts(&amounts, 100.0).unwrap();

        assert_eq!(slider.min, 1_000.0);
        assert_eq!(slider.max, 52_764.9);
        assert_eq!(slider.value, 10_000.0);
        // 0.75 and 1.0 quantiles truncate to the same tick
        let values: Vec<i64> = slider.marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![1_000, 2_500, 10_000, 52_764]);
        assert_eq!(slider.marks[3].label, "$52,764");
        assert!(slider.contains(10_000.0));
        assert!(!slider.contains(999.0));
    }

    #[test]
    fn test_negative_mark_label() {
        let slider = BillingSlider::from_amounts(&[-502.5, 100.0], 100.0).unwrap();
        assert_eq!(slider.marks[0].value, -502);
        assert_eq!(slider.marks[0].label, "$-502");
    }

    #[test]
    fn test_summary_from_table() {
        let table = sample_table();
        let summary = DatasetSummary::from_table(&table, 100.0);

        assert_eq!(summary.total_records, 12);
        assert_eq!(summary.missing_billing, 2);
        assert_eq!(summary.gender_options, vec!["Female", "Male"]);
        assert_eq!(summary.condition_options[0], "Diabetes");

        let expected = stats::mean(&table.billing_amounts()).unwrap();
        assert_eq!(summary.average_billing, Some(expected));
        assert_eq!(
            summary.default_threshold(),
            stats::median(&table.billing_amounts())
        );
    }

    #[test]
    fn test_summary_without_billing() {
        let summary = DatasetSummary::from_table(&RecordTable::default(), 100.0);
        assert_eq!(summary.total_records, 0);
        assert!(summary.average_billing.is_none());
        assert!(summary.billing_slider.is_none());
        assert!(summary.default_threshold().is_none());
    }
}
