//! Outlier and percentile filtering of a gene population by header coverage.

use std::collections::HashSet;

use tracing::debug;

use super::FeatureVector;
use crate::config::{DataAnalysisConfig, PercentileFilter, PercentileMode};

/// Drop genes whose header coverage marks them as outliers, then apply the
/// optional percentile band. Survivors keep their input order.
///
/// Coverage is a gene's header count over the size of the header union of
/// the whole input. Returns `genes` untouched when analysis is disabled.
pub fn filter_population<E>(
    genes: Vec<FeatureVector<E>>,
    config: &DataAnalysisConfig,
) -> Vec<FeatureVector<E>> {
    if !config.effective_enabled() || genes.is_empty() {
        return genes;
    }

    let union = header_union_len(&genes);
    let counts: Vec<usize> = genes.iter().map(|g| g.headers.len()).collect();
    let mut keep = vec![true; genes.len()];

    let multiplier = config.effective_outlier_mad_multiplier();
    if multiplier > 0.0 {
        cut_outliers(&counts, union, f64::from(multiplier), &mut keep);
    }
    if let Some(filter) = &config.percentile {
        apply_percentile(&counts, union, filter, &mut keep);
    }

    let before = genes.len();
    let kept: Vec<FeatureVector<E>> = genes
        .into_iter()
        .zip(keep)
        .filter_map(|(gene, k)| k.then_some(gene))
        .collect();
    debug!(before, kept = kept.len(), header_union = union, "population filtered");
    kept
}

fn header_union_len<E>(genes: &[FeatureVector<E>]) -> usize {
    genes
        .iter()
        .flat_map(|g| g.headers.iter().map(String::as_str))
        .collect::<HashSet<&str>>()
        .len()
}

fn coverage(count: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        count as f64 / union as f64
    }
}

/// Median absolute deviation cut around the median coverage.
fn cut_outliers(counts: &[usize], union: usize, multiplier: f64, keep: &mut [bool]) {
    let coverages: Vec<f64> = counts.iter().map(|&c| coverage(c, union)).collect();
    let center = median(coverages.clone());
    let deviations: Vec<f64> = coverages.iter().map(|c| (c - center).abs()).collect();
    let threshold = multiplier * median(deviations.clone());

    for (k, deviation) in keep.iter_mut().zip(&deviations) {
        if *deviation > threshold {
            *k = false;
        }
    }
}

/// Bounds are scaled in f32 and truncated, so `upper = 1.0` always keeps
/// the top of the range.
fn apply_percentile(counts: &[usize], union: usize, filter: &PercentileFilter, keep: &mut [bool]) {
    match filter.mode {
        PercentileMode::HeaderCoverage => {
            let min = (union as f32 * filter.lower) as usize;
            let max = (union as f32 * filter.upper) as usize;
            for (k, &count) in keep.iter_mut().zip(counts) {
                if count < min || count > max {
                    *k = false;
                }
            }
        }
        PercentileMode::PopulationRank => {
            let mut ranked: Vec<usize> = (0..counts.len()).filter(|&i| keep[i]).collect();
            ranked.sort_by_key(|&i| counts[i]);
            let population = ranked.len() as f32;
            let start = (population * filter.lower) as usize;
            let end = (population * filter.upper) as usize;
            for (rank, &i) in ranked.iter().enumerate() {
                if rank < start || rank >= end {
                    keep[i] = false;
                }
            }
        }
    }
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
