//! Benchmarks for pulse-core sorting and formatting

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pulse_core::{
    Record, SortDirection, TableView, format_count, sort_records,
    vocabulary::CONTENT,
};
use std::hint::black_box;

/// Build a content table of `n` synthetic articles
fn synthetic_records(n: u32) -> Vec<Record> {
    (0..n)
        .map(|id| {
            let views = u64::from(id.wrapping_mul(2_654_435_761) % 5_000_000);
            Record::new(id)
                .with("title", format!("Article {id:05}"))
                .with("category", if id % 3 == 0 { "Marketing" } else { "Engineering" })
                .with("status", pulse_core::Status::Published)
                .with("views", views)
                .with("shares", views / 40)
                .with("comments", views / 400)
                .with("engagement", f64::from(id % 150) / 10.0)
        })
        .collect()
}

/// Benchmark sorting on numeric and text fields
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100_u32, 1_000, 10_000] {
        let records = synthetic_records(size);
        group.throughput(Throughput::Elements(u64::from(size)));

        group.bench_with_input(BenchmarkId::new("views_desc", size), &records, |b, records| {
            b.iter(|| sort_records(black_box(records), &CONTENT, "views", SortDirection::Descending))
        });

        group.bench_with_input(BenchmarkId::new("title_asc", size), &records, |b, records| {
            b.iter(|| sort_records(black_box(records), &CONTENT, "title", SortDirection::Ascending))
        });
    }

    group.finish();
}

/// Benchmark count abbreviation across magnitudes
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_count");

    for n in [42_i64, 15_300, 2_500_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| format_count(black_box(n)))
        });
    }

    group.finish();
}

/// Benchmark a full table render (filter, sort, format)
fn bench_table_rows(c: &mut Criterion) {
    let view = TableView::new(CONTENT, synthetic_records(1_000)).with_limit(Some(10));

    c.bench_function("table_rows_top10_of_1000", |b| b.iter(|| black_box(&view).rows()));
}

criterion_group!(benches, bench_sort, bench_format, bench_table_rows);
criterion_main!(benches);
