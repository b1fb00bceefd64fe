//! Property-based tests for configuration and population filtering.

use phylo_core::config::*;
use phylo_core::types::{filter_population, FeatureVector, GeneticEncoding};
use proptest::prelude::*;

fn percentile_filter() -> impl Strategy<Value = PercentileFilter> {
    (any::<bool>(), 0.0f32..=1.0, 0.0f32..=1.0).prop_map(|(rank, a, b)| PercentileFilter {
        mode: if rank {
            PercentileMode::PopulationRank
        } else {
            PercentileMode::HeaderCoverage
        },
        lower: a.min(b),
        upper: a.max(b),
    })
}

fn data_analysis() -> impl Strategy<Value = DataAnalysisConfig> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(0.0f32..10.0),
        proptest::option::of(percentile_filter()),
    )
        .prop_map(|(enabled, outlier_mad_multiplier, percentile)| DataAnalysisConfig {
            enabled,
            outlier_mad_multiplier,
            percentile,
        })
}

fn phylo_config() -> impl Strategy<Value = PhyloConfig> {
    (
        any::<bool>(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(1usize..64),
        proptest::char::range('!', '~'),
        data_analysis(),
    )
        .prop_map(|(edit, parallel, threads, retired_marker, data_analysis)| PhyloConfig {
            metric: if edit {
                MetricKind::EditDistance
            } else {
                MetricKind::Euclidean
            },
            matrix: MatrixConfig { parallel, threads },
            pairing: PairingConfig { retired_marker },
            data_analysis,
        })
}

/// Genes drawing headers from a pool of twelve; values match header counts.
fn population() -> impl Strategy<Value = Vec<FeatureVector<f32>>> {
    prop::collection::vec(prop::collection::btree_set(0usize..12, 0..12), 0..16).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(i, set)| {
                let headers: Vec<String> = set.iter().map(|h| format!("h{h}")).collect();
                let values = vec![1.0; headers.len()];
                FeatureVector::with_headers(format!("g{i}"), headers, values)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn valid_config_round_trips_through_toml(config in phylo_config()) {
        prop_assert!(config.validate().is_ok());
        let text = config.to_toml().unwrap();
        let back = PhyloConfig::from_toml(&text).unwrap();
        prop_assert_eq!(back, config);
    }

    #[test]
    fn filter_keeps_an_ordered_subset(genes in population(), analysis in data_analysis()) {
        let names: Vec<String> = genes.iter().map(|g| g.name.clone()).collect();
        let kept = filter_population(genes, &analysis);

        let mut remaining = names.iter();
        for gene in &kept {
            prop_assert!(remaining.any(|n| *n == gene.name), "{} out of order", gene.name);
        }
        if !analysis.effective_enabled() {
            prop_assert_eq!(kept.len(), names.len());
        }
    }

    #[test]
    fn aligned_union_comes_from_surviving_genes(genes in population(), analysis in data_analysis()) {
        let enc = GeneticEncoding::aligned_with(genes, 0.0, &analysis).unwrap();
        // Every header slot is filled by at least one gene that owns it.
        for (slot, header) in enc.headers.iter().enumerate() {
            prop_assert!(enc.genes.iter().any(|g| g.values[slot] == 1.0), "{} has no owner", header);
        }
        prop_assert!(enc.genes.iter().all(|g| g.values.len() == enc.headers.len()));
    }
}
