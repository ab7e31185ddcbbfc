use agglo::clustering::{cluster, Linkage};
use agglo::distances::{DistanceMetric, EuclideanDistance, LabeledVector, ManhattanDistance};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

fn generate_random_vectors(rows: usize, cols: usize, seed: u64) -> Vec<LabeledVector<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let normal = StandardNormal;

    (0..rows)
        .map(|i| {
            let data: Vec<f64> = (0..cols).map(|_| normal.sample(&mut rng)).collect();
            LabeledVector::from_slice(format!("v{}", i), &data)
        })
        .collect()
}

fn benchmark_distance_computation(c: &mut Criterion) {
    let vectors = generate_random_vectors(2, 128, 42);
    let point1 = vectors[0].view();
    let point2 = vectors[1].view();

    c.bench_function("distance_computation_euclidean", |b| {
        b.iter(|| {
            EuclideanDistance
                .compute(black_box(&point1), black_box(&point2))
                .unwrap();
        });
    });

    c.bench_function("distance_computation_manhattan", |b| {
        b.iter(|| {
            ManhattanDistance
                .compute(black_box(&point1), black_box(&point2))
                .unwrap();
        });
    });
}

fn benchmark_clustering(c: &mut Criterion) {
    let vectors = generate_random_vectors(200, 8, 42);

    for linkage in [Linkage::Single, Linkage::Average] {
        c.bench_function(&format!("cluster_200x8_{:?}", linkage), |b| {
            b.iter(|| {
                let result = cluster(
                    black_box(&vectors),
                    std::sync::Arc::new(EuclideanDistance),
                    linkage,
                )
                .unwrap();
                black_box(result);
            });
        });
    }
}

criterion_group!(
    benches,
    benchmark_distance_computation,
    benchmark_clustering
);
criterion_main!(benches);
