//! Billing amount distribution under a threshold

use super::histogram::{Histogram, DEFAULT_BINS};
use super::stats;
use crate::records::{CategoryField, RecordTable};

/// Series name used for the billing histogram
pub const BILLING_SERIES: &str = "Billing Amount";

/// Histogram of billing amounts at or below `threshold`
///
/// The gender filter is applied first, then rows with a billing amount
/// `<= threshold` are kept. Missing amounts never pass the comparison, nor
/// does anything when `threshold` is NaN. When no rows remain the result is a
/// zero-count histogram spanning the table's billing domain.
pub fn billing_distribution(table: &RecordTable, gender: Option<&str>, threshold: f64) -> Histogram {
    billing_distribution_with_bins(table, gender, threshold, DEFAULT_BINS)
}

pub fn billing_distribution_with_bins(
    table: &RecordTable,
    gender: Option<&str>,
    threshold: f64,
    bins: usize,
) -> Histogram {
    let amounts: Vec<f64> = table
        .select(CategoryField::Gender, gender)
        .into_iter()
        .filter_map(|r| r.billing_amount)
        .filter(|amount| *amount <= threshold)
        .collect();

    Histogram::from_values(bins, BILLING_SERIES, amounts).unwrap_or_else(|| {
        let (lo, hi) = stats::min_max(&table.billing_amounts()).unwrap_or((0.0, 1.0));
        Histogram::empty(bins, BILLING_SERIES, lo, hi)
    })
}
