/*
 * Flock Benchmark
 *
 * Measures the brute-force neighbor scan of a single rule and the full tick
 * for each update order, at population sizes around the intended range.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use flocking::rules::{steer, Rule};
use flocking::{Flock, SimulationParams, UpdateMode};

const SIZES: [usize; 4] = [50, 100, 200, 400];

fn seeded_flock(n: usize) -> (Flock, SimulationParams) {
    let params = SimulationParams::default().with_num_boids(n);
    let flock = Flock::seeded(&params, &mut StdRng::seed_from_u64(n as u64)).expect("default params are valid");
    (flock, params)
}

// Benchmark one rule's scan for every boid
fn bench_rule_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_scan");

    for &n in SIZES.iter() {
        let (flock, params) = seeded_flock(n);
        for rule in Rule::ALL {
            group.bench_with_input(BenchmarkId::new(rule.name(), n), &n, |b, &n| {
                b.iter(|| {
                    for i in 0..n {
                        black_box(steer(rule, i, flock.boids(), params.perception_radius));
                    }
                });
            });
        }
    }

    group.finish();
}

// Benchmark the whole tick under each update order
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    let modes = [
        ("snapshot", UpdateMode::Snapshot, false),
        ("snapshot_parallel", UpdateMode::Snapshot, true),
        ("sequential", UpdateMode::Sequential, false),
    ];

    for &n in SIZES.iter() {
        for (label, mode, parallel) in modes {
            let (flock, mut params) = seeded_flock(n);
            params.update_mode = mode;
            params.enable_parallel = parallel;

            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, _| {
                let mut flock = flock.clone();
                b.iter(|| {
                    flock.step(black_box(&params));
                });
            });
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_rule_scan, bench_step
}

criterion_main!(benches);
