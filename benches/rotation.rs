// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the fact rotation.
//!
//! Measures the performance of:
//! - The two pure state transitions
//! - Draining one full rotation period from the logical clock

use criterion::{criterion_group, criterion_main, Criterion};
use feline_fascination::domain::rotation::FactInterval;
use feline_fascination::rotation::{ManualScheduler, RotationState, RotationTimer};
use std::hint::black_box;
use std::num::NonZeroUsize;

const DECK_LEN: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(len) => len,
    None => NonZeroUsize::MIN,
};

fn transitions_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_transitions");

    group.bench_function("tick_progress", |b| {
        let state = RotationState::new(DECK_LEN);
        b.iter(|| black_box(black_box(state).tick_progress()));
    });

    group.bench_function("advance_fact", |b| {
        let state = RotationState::new(DECK_LEN);
        b.iter(|| black_box(black_box(state).advance_fact()));
    });

    group.finish();
}

fn scheduler_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_scheduler");
    let interval = FactInterval::default();

    group.bench_function("drive_one_period", |b| {
        b.iter(|| {
            let mut timer = RotationTimer::new(DECK_LEN, interval);
            timer.activate();
            let mut scheduler = ManualScheduler::new(interval);
            black_box(scheduler.drive(&mut timer, interval.fact_period()))
        });
    });

    group.finish();
}

criterion_group!(benches, transitions_benchmark, scheduler_benchmark);
criterion_main!(benches);
