//! Property-based tests for metrics, matrix construction and pairing.

use phylo_cluster::{AverageLinkage, CorrelationMatrixEngine, EditDistance, Euclidean, TriangleIndexer};
use phylo_core::config::MatrixConfig;
use phylo_core::traits::DissimilarityMetric;
use phylo_core::types::{ClusterLabel, FeatureVector};
use proptest::prelude::*;

fn numeric_gene() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, 0..8)
}

fn numeric_genes(max: usize) -> impl Strategy<Value = Vec<FeatureVector<f32>>> {
    prop::collection::vec(numeric_gene(), 2..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, values)| FeatureVector::new(format!("g{i}"), values))
            .collect()
    })
}

fn token_gene() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{0,4}", 0..6)
}

fn leaf_labels(genes: &[FeatureVector<f32>]) -> Vec<ClusterLabel> {
    genes.iter().map(|g| ClusterLabel::leaf(g.name.as_str())).collect()
}

proptest! {
    #[test]
    fn euclidean_is_symmetric_and_zero_on_self(a in numeric_gene(), b in numeric_gene()) {
        let a = FeatureVector::new("a", a);
        let b = FeatureVector::new("b", b);
        let ab = Euclidean.distance(&a, &b).unwrap();
        let ba = Euclidean.distance(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(Euclidean.distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn euclidean_tail_equals_zero_padding(a in numeric_gene(), b in numeric_gene()) {
        let width = a.len().max(b.len());
        let mut pa = a.clone();
        pa.resize(width, 0.0);
        let mut pb = b.clone();
        pb.resize(width, 0.0);
        let ragged = Euclidean
            .distance(&FeatureVector::new("a", a), &FeatureVector::new("b", b))
            .unwrap();
        let padded = Euclidean
            .distance(&FeatureVector::new("a", pa), &FeatureVector::new("b", pb))
            .unwrap();
        prop_assert_eq!(ragged, padded);
    }

    #[test]
    fn edit_distance_stays_in_unit_interval(a in token_gene(), b in token_gene()) {
        let a = FeatureVector::new("a", a);
        let b = FeatureVector::new("b", b);
        let ab = EditDistance.distance(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, EditDistance.distance(&b, &a).unwrap());
        prop_assert_eq!(EditDistance.distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn triangle_predicate_matches_row_major_pairs(n in 0usize..40) {
        let tri = TriangleIndexer::new(n);
        let from_flat: Vec<_> = (0..tri.cell_count())
            .filter(|&k| tri.is_upper(k))
            .map(|k| tri.coords(k))
            .collect();
        let pairs: Vec<_> = tri.upper_pairs().collect();
        prop_assert_eq!(pairs.len(), tri.pair_count());
        prop_assert_eq!(from_flat, pairs);
    }

    #[test]
    fn parallel_build_matches_sequential(genes in numeric_genes(24)) {
        let seq = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::sequential())
            .build(&genes)
            .unwrap();
        let par = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::default())
            .build(&genes)
            .unwrap();
        prop_assert!(seq.is_symmetric());
        prop_assert!(seq.as_slice().iter().all(|&c| (0.0..=1.0).contains(&c)));
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn pairing_emits_one_merge_per_absorbed_leaf(genes in numeric_genes(20)) {
        let n = genes.len();
        let matrix = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::default())
            .build(&genes)
            .unwrap();
        let events = AverageLinkage::default().pair(matrix, leaf_labels(&genes)).unwrap();
        prop_assert_eq!(events.len(), n - 1);
    }

    #[test]
    fn first_merge_is_the_global_minimum(genes in numeric_genes(20)) {
        let matrix = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::sequential())
            .build(&genes)
            .unwrap();
        let n = matrix.dimension();
        let min = TriangleIndexer::new(n)
            .upper_pairs()
            .map(|(i, j)| matrix.get(i, j))
            .fold(f32::INFINITY, f32::min);
        let events = AverageLinkage::default().pair(matrix, leaf_labels(&genes)).unwrap();
        prop_assert_eq!(events[0].distance, min);
    }

    #[test]
    fn absorbed_clusters_never_reappear(genes in numeric_genes(20)) {
        let n = genes.len();
        let matrix = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::default())
            .build(&genes)
            .unwrap();
        let events = AverageLinkage::default().pair(matrix, leaf_labels(&genes)).unwrap();

        let mut seen = std::collections::HashSet::new();
        for (step, event) in events.iter().enumerate() {
            prop_assert!(seen.insert(event.first.clone()), "{} reused", event.first);
            prop_assert!(seen.insert(event.second.clone()), "{} reused", event.second);
            if let Some(id) = event.first.internal_id() {
                prop_assert!(id >= n && id < n + step);
            }
        }
        // Every leaf and every non-root internal node is consumed exactly once.
        prop_assert_eq!(seen.len(), 2 * (n - 1));
    }

    #[test]
    fn pairing_is_deterministic(genes in numeric_genes(16)) {
        let build = || {
            CorrelationMatrixEngine::new(Euclidean, MatrixConfig::default())
                .build(&genes)
                .unwrap()
        };
        let pairing = AverageLinkage::default();
        let a = pairing.pair(build(), leaf_labels(&genes)).unwrap();
        let b = pairing.pair(build(), leaf_labels(&genes)).unwrap();
        prop_assert_eq!(a, b);
    }
}
