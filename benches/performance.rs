//! Performance benchmarks for the record board.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recordboard::{
    validate, FieldValue, FilteredView, RecordStatus, RecordStore, TextRenderer, ValidationRule,
};
use std::sync::Arc;

/// Benchmark append with a growing store and two subscribed views
fn bench_append_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_fan_out");

    for existing in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("existing_records", existing),
            &existing,
            |b, &existing| {
                let store = Arc::new(RecordStore::new());
                let _active = FilteredView::new(
                    RecordStatus::Active,
                    Arc::clone(&store),
                    "app",
                    TextRenderer::new(),
                );
                let _finished = FilteredView::new(
                    RecordStatus::Finished,
                    Arc::clone(&store),
                    "app",
                    TextRenderer::new(),
                );

                for i in 0..existing {
                    store.append(format!("record {}", i), "benchmark record", 1);
                }

                b.iter(|| {
                    black_box(store.append("Build API", "Design and implement", 3));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark subscriber count against a fixed store size
fn bench_subscriber_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("subscriber_count");

    for subscribers in [1, 10, 50] {
        group.bench_with_input(
            BenchmarkId::new("subscribers", subscribers),
            &subscribers,
            |b, &subscribers| {
                let store = RecordStore::new();
                for _ in 0..subscribers {
                    store.subscribe(|snapshot| {
                        black_box(snapshot.len());
                    });
                }

                b.iter(|| {
                    black_box(store.append("Build API", "Design and implement", 3));
                });
            },
        );
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    c.bench_function("validate_capacity", |b| {
        b.iter(|| {
            let rule = ValidationRule::new(FieldValue::parse_number(black_box("7")))
                .required()
                .min(1.0)
                .max(10.0);
            black_box(validate(&rule))
        });
    });
}

criterion_group!(
    benches,
    bench_append_fan_out,
    bench_subscriber_count,
    bench_validation
);
criterion_main!(benches);
