use cellid_logic::{CellId, MAX_LEVEL, Point};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn generate_fixed_ids(size: usize, seed: u64) -> Vec<CellId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed); // シード固定
    let mut ids = Vec::with_capacity(size);

    for _ in 0..size {
        let id = CellId::random_within_using(&mut rng, 0..=MAX_LEVEL);
        ids.push(id);
    }
    ids
}

fn generate_fixed_points(size: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(size);

    while points.len() < size {
        let x = rng.random_range(-1.0..=1.0);
        let y = rng.random_range(-1.0..=1.0);
        let z = rng.random_range(-1.0..=1.0);
        if let Ok(p) = Point::new(x, y, z) {
            points.push(p.normalize());
        }
    }
    points
}

fn bench_cell_id_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("CellId Operations");

    let sizes = [100, 1_000, 10_000];

    for &size in &sizes {
        let ids = generate_fixed_ids(size, 12345);
        let points = generate_fixed_points(size, 67890);

        group.bench_with_input(BenchmarkId::new("FromPoint", size), &points, |b, points| {
            b.iter(|| {
                for p in points {
                    black_box(CellId::from_point(p));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("Center", size), &ids, |b, ids| {
            b.iter(|| {
                for id in ids {
                    black_box(id.center());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("EdgeNeighbors", size), &ids, |b, ids| {
            b.iter(|| {
                for id in ids {
                    black_box(id.edge_neighbors());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("TokenRoundTrip", size), &ids, |b, ids| {
            b.iter(|| {
                for id in ids {
                    let token = id.to_token();
                    black_box(CellId::from_token(&token).unwrap());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cell_id_operations);
criterion_main!(benches);
