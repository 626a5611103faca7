//! Benchmarks for step generation and reconstruction
//!
//! Measures, per algorithm at the largest accepted input:
//! - Step log generation
//! - Full reconstruction at the last cursor
//! - Stepping a replayer through the whole log

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sorta_algorithms::{Algorithm, Value};
use sorta_playback::{reconstruct, Cursor, Replayer};

const N: usize = 100;

fn shuffled_input() -> Vec<Value> {
    let mut input: Vec<Value> = (1..=N as Value).collect();
    input.shuffle(&mut StdRng::seed_from_u64(42));
    input
}

fn deterministic() -> impl Iterator<Item = Algorithm> {
    Algorithm::ALL.into_iter().filter(|a| !a.is_randomized())
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_steps");
    let input = shuffled_input();

    for algorithm in deterministic() {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.name()),
            &input,
            |b, input| b.iter(|| algorithm.generate_steps(black_box(input))),
        );
    }
    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct_last");
    let input = shuffled_input();

    for algorithm in deterministic() {
        let steps = algorithm.generate_steps(&input);
        group.throughput(Throughput::Elements(steps.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.name()),
            &steps,
            |b, steps| {
                b.iter(|| reconstruct(black_box(steps), Cursor::last(steps.len()), &input))
            },
        );
    }
    group.finish();
}

fn bench_replayer_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("replayer_walk");
    let input = shuffled_input();

    for algorithm in [Algorithm::Bubble, Algorithm::Merge, Algorithm::Quick] {
        let steps = algorithm.generate_steps(&input);
        group.throughput(Throughput::Elements(steps.len() as u64));
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut replayer = Replayer::new(steps.clone(), input.clone());
                let mut cursor = Cursor::Start;
                while cursor < Cursor::last(steps.len()) {
                    cursor = cursor.forward(steps.len());
                    black_box(replayer.seek(cursor));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_reconstruct, bench_replayer_walk);
criterion_main!(benches);
