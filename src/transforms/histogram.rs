//! Equal-width histogram binning
//!
//! Bins are `[lo + i*w, lo + (i+1)*w)`; the last bin is closed so the
//! maximum observed value is counted. When every value is identical the
//! range is widened by 0.5 on each side.

use serde::Serialize;

/// Default number of bins used by the dashboard histograms
pub const DEFAULT_BINS: usize = 10;

/// Counts for one sub-group sharing the histogram's bin edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub name: String,
    pub counts: Vec<usize>,
}

impl HistogramSeries {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A binned frequency structure, optionally split into series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `bins + 1` ascending edges
    pub edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

impl Histogram {
    /// Bin grouped values over their combined observed range
    ///
    /// Returns `None` when there are no values at all.
    pub fn from_groups(bins: usize, groups: Vec<(String, Vec<f64>)>) -> Option<Self> {
        let bins = bins.max(1);
        let (lo, hi) = groups
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })?;

        let edges = equal_width_edges(bins, lo, hi);
        let series = groups
            .into_iter()
            .map(|(name, values)| {
                let mut counts = vec![0usize; bins];
                for v in values {
                    counts[bin_index(v, &edges)] += 1;
                }
                HistogramSeries { name, counts }
            })
            .collect();

        Some(Self { edges, series })
    }

    /// A single-series histogram over `values`
    pub fn from_values(bins: usize, name: impl Into<String>, values: Vec<f64>) -> Option<Self> {
        Self::from_groups(bins, vec![(name.into(), values)])
    }

    /// A zero-count histogram spanning `[lo, hi]`
    pub fn empty(bins: usize, name: impl Into<String>, lo: f64, hi: f64) -> Self {
        let bins = bins.max(1);
        Self {
            edges: equal_width_edges(bins, lo, hi),
            series: vec![HistogramSeries {
                name: name.into(),
                counts: vec![0; bins],
            }],
        }
    }

    pub fn bins(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if self.bins() > 0 => (hi - lo) / self.bins() as f64,
            _ => 0.0,
        }
    }

    /// Midpoint of each bin
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Per-bin counts summed across series
    pub fn counts(&self) -> Vec<usize> {
        let mut totals = vec![0usize; self.bins()];
        for series in &self.series {
            for (total, count) in totals.iter_mut().zip(&series.counts) {
                *total += count;
            }
        }
        totals
    }

    /// Total number of counted values
    pub fn total(&self) -> usize {
        self.series.iter().map(HistogramSeries::total).sum()
    }
}

fn equal_width_edges(bins: usize, lo: f64, hi: f64) -> Vec<f64> {
    let (lo, hi) = if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) };
    let width = (hi - lo) / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect()
}

fn bin_index(value: f64, edges: &[f64]) -> usize {
    let bins = edges.len() - 1;
    let lo = edges[0];
    let width = (edges[bins] - lo) / bins as f64;
    let idx = ((value - lo) / width).floor();
    if idx < 0.0 {
        0
    } else {
        (idx as usize).min(bins - 1)
    }
}
