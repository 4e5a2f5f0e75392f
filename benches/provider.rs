// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification provider operations.
//!
//! Measures the performance of:
//! - Raising notifications through a notifier
//! - Expiring a batch of due countdowns on tick
//! - Closing everything at once

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_toast::ui::notifications::{ManualClock, Options, Provider};
use std::hint::black_box;
use std::time::Duration;

const BATCH: usize = 256;

fn filled_provider(clock: &ManualClock) -> Provider<ManualClock> {
    let provider = Provider::with_clock(clock.clone());
    for i in 0..BATCH {
        provider.notify(Options::new(format!("toast {i}")).duration_ms(1000));
    }
    provider
}

/// Benchmark raising notifications through a notifier.
fn bench_notify(c: &mut Criterion) {
    let mut group = c.benchmark_group("provider");

    group.bench_function("notify_256", |b| {
        b.iter_batched(
            || Provider::with_clock(ManualClock::new()),
            |provider| {
                let notifier = provider.notifier();
                for i in 0..BATCH {
                    black_box(notifier.notify(Options::new(format!("toast {i}"))));
                }
                provider
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark a tick that expires every countdown.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("provider");

    group.bench_function("tick_expire_256", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let provider = filled_provider(&clock);
                clock.advance(Duration::from_secs(2));
                provider
            },
            |provider| {
                black_box(provider.tick());
                provider
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark closing every notification at once.
fn bench_close_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("provider");

    group.bench_function("close_all_256", |b| {
        b.iter_batched(
            || filled_provider(&ManualClock::new()),
            |provider| {
                provider.close_all();
                provider
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_notify, bench_tick, bench_close_all);
criterion_main!(benches);
