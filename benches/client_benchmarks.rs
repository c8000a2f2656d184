//! Performance benchmarks for the back-office client.
//!
//! Covers the per-frame work of the animated counter, number formatting,
//! failure classification, and the overhead the request pipeline adds to a
//! request that completes immediately.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use serde_json::json;

use backoffice_client::config::NotificationConfig;
use backoffice_client::counter::{
    AnimatedCounter, GroupingFormatter, LocaleFormatter, ManualClock, ManualScheduler,
};
use backoffice_client::pipeline::{RequestFailure, RequestPipeline, ToastBoard, classify};

fn bench_formatting(c: &mut Criterion) {
    let formatter = GroupingFormatter::default();
    let mut group = c.benchmark_group("format");

    for value in [Decimal::new(999, 0), Decimal::new(1_250_000, 0), Decimal::new(123_456_789_012_345, 2)] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, value| {
            b.iter(|| formatter.format(black_box(*value)))
        });
    }

    group.finish();
}

fn bench_counter_animation(c: &mut Criterion) {
    c.bench_function("counter_full_animation_60hz", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let mut counter = AnimatedCounter::new(ManualScheduler::new(), clock.clone(), String::new());
            counter.on_value_change(black_box(Decimal::new(1_250_000, 0)));
            while counter.is_animating() {
                counter.run_pending_frames();
                clock.advance(Duration::from_millis(16));
            }
            counter.display().len()
        })
    });
}

fn bench_classification(c: &mut Criterion) {
    let failures = [
        RequestFailure::transport("connection refused"),
        RequestFailure::status(400, "Bad Request", Some(json!({"message": "Shift overlaps"}))),
        RequestFailure::status(401, "Unauthorized", None),
        RequestFailure::status(503, "Service Unavailable", None),
    ];

    c.bench_function("classify_mixed_failures", |b| {
        b.iter(|| {
            failures
                .iter()
                .map(|failure| classify(black_box(failure)))
                .count()
        })
    });
}

fn bench_pipeline_overhead(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let pipeline = RequestPipeline::with_host(Arc::new(ToastBoard::new()), NotificationConfig::default());

    c.bench_function("pipeline_wrap_success", |b| {
        b.to_async(&runtime).iter(|| {
            let pipeline = pipeline.clone();
            async move {
                pipeline
                    .wrap(async { Ok::<_, RequestFailure>(black_box(1u32)) })
                    .await
            }
        })
    });
}

criterion_group!(
    benches,
    bench_formatting,
    bench_counter_animation,
    bench_classification,
    bench_pipeline_overhead
);
criterion_main!(benches);
