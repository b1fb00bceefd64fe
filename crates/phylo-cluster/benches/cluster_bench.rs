use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phylo_cluster::{AverageLinkage, CorrelationMatrixEngine, Euclidean};
use phylo_core::config::MatrixConfig;
use phylo_core::types::{ClusterLabel, FeatureVector};

fn genes(n: usize, width: usize) -> Vec<FeatureVector<f32>> {
    (0..n)
        .map(|i| {
            let values = (0..width)
                .map(|d| ((i * 31 + d * 17) % 97) as f32 / 7.0)
                .collect();
            FeatureVector::new(format!("g{i}"), values)
        })
        .collect()
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_build");
    for &n in &[64usize, 256] {
        let input = genes(n, 32);
        let seq = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::sequential());
        let par = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::default());
        group.bench_with_input(BenchmarkId::new("sequential", n), &input, |b, g| {
            b.iter(|| seq.build(black_box(g)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &input, |b, g| {
            b.iter(|| par.build(black_box(g)).unwrap())
        });
    }
    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_linkage");
    group.sample_size(10);
    for &n in &[32usize, 128] {
        let input = genes(n, 16);
        let matrix = CorrelationMatrixEngine::new(Euclidean, MatrixConfig::default())
            .build(&input)
            .unwrap();
        let labels: Vec<ClusterLabel> = input.iter().map(|g| ClusterLabel::leaf(g.name.as_str())).collect();
        let pairing = AverageLinkage::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| pairing.pair(matrix.clone(), labels.clone()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix, bench_pairing);
criterion_main!(benches);
