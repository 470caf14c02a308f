//! Performance benchmarks for snapshot normalization
//!
//! Measures view construction and line formatting across worker counts.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use puma_stats_logger::reporter::StatsReporter;
use puma_stats_logger::snapshot::Snapshot;
use puma_stats_logger::view::StatsView;
use serde_json::{json, Value};

/// Generate a clustered snapshot with the given number of workers.
fn generate_clustered_snapshot(workers: usize) -> Value {
    let worker_status: Vec<Value> = (0..workers)
        .map(|i| {
            json!({
                "last_status": {
                    "running": 5,
                    "backlog": i % 3,
                    "pool_capacity": i % 6,
                    "max_threads": 5,
                    "requests_count": 1000 + i,
                }
            })
        })
        .collect();

    json!({
        "workers": workers,
        "booted_workers": workers,
        "old_workers": 0,
        "worker_status": worker_status,
    })
}

/// Benchmark view construction over growing cluster sizes
fn bench_view_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_construction");

    for size in [1, 4, 16, 64].iter() {
        let snapshot = Snapshot::new(generate_clustered_snapshot(*size));
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_workers", size)),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    let view = StatsView::new(black_box(snapshot), 500).unwrap();
                    black_box(view)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark line formatting from a pre-built view
fn bench_line_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_formatting");

    for size in [1, 4, 16, 64].iter() {
        let snapshot = Snapshot::new(generate_clustered_snapshot(*size));
        let view = StatsView::new(&snapshot, 500).unwrap();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_workers", size)),
            &view,
            |b, view| {
                b.iter(|| {
                    let line = StatsReporter::format_line(black_box(view));
                    black_box(line)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the whole per-cycle path on the single-process shape
fn bench_single_process_cycle(c: &mut Criterion) {
    let snapshot = Snapshot::new(json!({
        "running": 5,
        "backlog": 2,
        "pool_capacity": 3,
        "max_threads": 8,
        "requests_count": 50,
    }));

    c.bench_function("single_process_construct_and_format", |b| {
        b.iter(|| {
            let view = StatsView::new(black_box(&snapshot), 20).unwrap();
            let line = StatsReporter::format_line(&view);
            black_box(line)
        });
    });
}

criterion_group!(
    benches,
    bench_view_construction,
    bench_line_formatting,
    bench_single_process_cycle,
);

criterion_main!(benches);
