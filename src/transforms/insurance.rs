//! Mean billing per insurance provider and medical condition

use crate::records::{CategoryField, RecordTable};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Mean billing for one condition across every provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSeries {
    pub condition: String,
    /// Aligned with `GroupedMeans::providers`; `None` where no valid billing exists
    pub means: Vec<Option<f64>>,
}

/// Billing means grouped side-by-side per provider
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupedMeans {
    pub providers: Vec<String>,
    pub series: Vec<GroupSeries>,
}

impl GroupedMeans {
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Mean billing for a (provider, condition) pair
    pub fn mean(&self, provider: &str, condition: &str) -> Option<f64> {
        let col = self.providers.iter().position(|p| p == provider)?;
        self.series
            .iter()
            .find(|s| s.condition == condition)
            .and_then(|s| s.means[col])
    }
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

/// Group the gender-filtered rows by (provider, condition) and average billing
///
/// Providers and conditions are sorted alphabetically. Missing billing
/// amounts do not contribute to any mean.
pub fn insurance_comparison(table: &RecordTable, gender: Option<&str>) -> GroupedMeans {
    let rows = table.select(CategoryField::Gender, gender);

    let mut providers = BTreeSet::new();
    let mut conditions = BTreeSet::new();
    let mut groups: BTreeMap<(&str, &str), Accumulator> = BTreeMap::new();

    for record in rows {
        providers.insert(record.insurance_provider.as_str());
        conditions.insert(record.medical_condition.as_str());

        if let Some(amount) = record.billing_amount {
            let acc = groups
                .entry((
                    record.insurance_provider.as_str(),
                    record.medical_condition.as_str(),
                ))
                .or_default();
            acc.sum += amount;
            acc.count += 1;
        }
    }

    let series = conditions
        .iter()
        .map(|condition| GroupSeries {
            condition: condition.to_string(),
            means: providers
                .iter()
                .map(|provider| {
                    groups
                        .get(&(*provider, *condition))
                        .filter(|acc| acc.count > 0)
                        .map(|acc| acc.sum / acc.count as f64)
                })
                .collect(),
        })
        .collect();

    GroupedMeans {
        providers: providers.into_iter().map(str::to_string).collect(),
        series,
    }
}
