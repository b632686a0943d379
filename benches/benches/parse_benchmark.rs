//! Parser and normalizer benchmarks.
//!
//! Run with: `cargo bench --package brvm-bench`

use brvm_bench::{bonds_page, indices_page, stocks_page};
use brvm_parse::{PageLayout, parse_bonds, parse_float, parse_indices, parse_stocks};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn normalizer_benchmark(c: &mut Criterion) {
    let inputs = ["12 345,67", "5,2%", "-0,42 %", "1\u{a0}234\u{a0}567,00", "n/d", ""];

    c.bench_function("parse_float", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(parse_float(black_box(input)));
            }
        });
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let layout = PageLayout::default();
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");

    let mut group = c.benchmark_group("parse");
    for rows in [10, 50, 200] {
        group.throughput(Throughput::Elements(rows as u64));

        let html = indices_page(rows);
        group.bench_with_input(BenchmarkId::new("indices", rows), &html, |b, html| {
            b.iter(|| parse_indices(black_box(html), &layout));
        });

        let html = stocks_page(rows);
        group.bench_with_input(BenchmarkId::new("stocks", rows), &html, |b, html| {
            b.iter(|| parse_stocks(black_box(html), &layout, date));
        });

        let html = bonds_page(rows);
        group.bench_with_input(BenchmarkId::new("bonds", rows), &html, |b, html| {
            b.iter(|| parse_bonds(black_box(html), &layout, date));
        });
    }
    group.finish();
}

criterion_group!(benches, normalizer_benchmark, parser_benchmark);
criterion_main!(benches);
