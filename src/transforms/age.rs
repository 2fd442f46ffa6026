//! Age distribution by gender

use super::histogram::{Histogram, DEFAULT_BINS};
use crate::records::{CategoryField, RecordTable};

/// Bin patient ages into equal-width bins, one series per gender
///
/// Series appear in the order their gender first occurs in the filtered rows.
/// Returns `None` ("no chart") when the gender filter matches no rows.
pub fn age_distribution(table: &RecordTable, gender: Option<&str>) -> Option<Histogram> {
    age_distribution_with_bins(table, gender, DEFAULT_BINS)
}

pub fn age_distribution_with_bins(
    table: &RecordTable,
    gender: Option<&str>,
    bins: usize,
) -> Option<Histogram> {
    let rows = table.select(CategoryField::Gender, gender);

    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in rows {
        match groups.iter_mut().find(|(name, _)| *name == record.gender) {
            Some((_, ages)) => ages.push(record.age as f64),
            None => groups.push((record.gender.clone(), vec![record.age as f64])),
        }
    }

    Histogram::from_groups(bins, groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::test_support::sample_table;

    #[test]
    fn test_counts_sum_to_row_count() {
        let table = sample_table();
        let hist = age_distribution(&table, None).unwrap();

        assert_eq!(hist.bins(), 10);
        assert_eq!(hist.total(), table.len());
        assert_eq!(hist.series.len(), 2);
        assert_eq!(hist.series[0].name, "Female");
    }

    #[test]
    fn test_gender_filter_single_series() {
        let table = sample_table();
        let hist = age_distribution(&table, Some("Male")).unwrap();

        let males = table.select(CategoryField::Gender, Some("Male")).len();
        assert_eq!(hist.series.len(), 1);
        assert_eq!(hist.series[0].name, "Male");
        assert_eq!(hist.total(), males);
    }

    #[test]
    fn test_range_follows_filtered_subset() {
        let table = sample_table();
        let hist = age_distribution(&table, Some("Male")).unwrap();

        let ages: Vec<u32> = table
            .select(CategoryField::Gender, Some("Male"))
            .iter()
            .map(|r| r.age)
            .collect();
        let min = *ages.iter().min().unwrap() as f64;
        let max = *ages.iter().max().unwrap() as f64;
        assert_eq!(hist.edges.first(), Some(&min));
        assert_eq!(hist.edges.last(), Some(&max));
    }

    #[test]
    fn test_unknown_gender_is_no_chart() {
        let table = sample_table();
        assert!(age_distribution(&table, Some("Other")).is_none());
        assert!(age_distribution(&RecordTable::default(), None).is_none());
    }
}
