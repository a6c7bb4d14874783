// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for store mutations and overlay reconciliation.
//!
//! Measures the performance of:
//! - Adding and removing alerts in the store
//! - Overlay ticks over a populated store (reconcile + animate)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_alerts::ui::design_tokens::motion;
use iced_alerts::{AlertProvider, Alerts, AlertsConfig, Category, Message};
use std::hint::black_box;
use std::time::Instant;

/// Benchmark raw store mutations.
fn bench_store_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("add_remove_100", |b| {
        b.iter(|| {
            let provider = AlertProvider::new();
            let ids: Vec<_> = (0..100)
                .map(|i| provider.add_alert(format!("alert-{i}"), "body", Category::Info))
                .collect();
            for id in ids {
                provider.remove_alert(id);
            }
            black_box(provider.alerts().len());
        });
    });

    group.bench_function("add_clear_100", |b| {
        b.iter(|| {
            let provider = AlertProvider::new();
            for i in 0..100 {
                provider.add_alert(format!("alert-{i}"), "body", Category::Warning);
            }
            provider.clear_alerts();
            black_box(provider.alerts().len());
        });
    });

    group.finish();
}

/// Benchmark overlay ticks: reconcile the render list against the store
/// and advance every animation.
fn bench_overlay_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");

    group.bench_function("tick_50_toasts", |b| {
        let provider = AlertProvider::new();
        for i in 0..50 {
            provider.add_alert(format!("alert-{i}"), "body", Category::Info);
        }
        let mut alerts = Alerts::new(AlertsConfig::default(), provider.context());
        let now = Instant::now();
        alerts.update(Message::Tick(now));

        // Repeated ticks at the same instant: measures reconciliation and
        // animation bookkeeping without letting deadlines drain the store.
        b.iter(|| {
            alerts.update(Message::Tick(now + motion::TICK));
            black_box(alerts.rendered_count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_store_mutations, bench_overlay_tick);
criterion_main!(benches);
