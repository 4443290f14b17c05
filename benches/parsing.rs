//! Benchmarks for chatlens parsing and statistics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use chatlens::config::AnalysisConfig;
use chatlens::dialect::{Dialect, detect_dialect_in};
use chatlens::parser::ExportParser;
use chatlens::report::Report;
use chatlens::stats::{
    emoji_counts, hourly_distribution, mean_media_interval_by_author, message_count_by_author,
    moving_weekly_message_count,
};

use chrono::{NaiveDate, TimeDelta};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_french_export(count: usize) -> String {
    let authors = ["Alice", "Bob", "Charlie", "Dana"];
    let mut ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let mut text = String::with_capacity(count * 64);
    for i in 0..count {
        ts += TimeDelta::minutes((i % 97) as i64 + 1);
        let author = authors[i % authors.len()];
        let body = match i % 10 {
            0 => "<Media omitted>".to_string(),
            1 => format!("Question number {i}?"),
            2 => format!("Party {i} 🎉🔥"),
            3 => format!("Line one of {i}\nline two"),
            _ => format!("Message number {i}"),
        };
        text.push_str(&format!(
            "{} - {}: {}\n",
            ts.format("%d/%m/%Y à %H:%M"),
            author,
            body
        ));
    }
    text.push_str("31/12/2099 à 23:59 - Fin\n");
    text
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = ExportParser::new(Dialect::French);

    for size in [100, 1_000, 10_000] {
        let export = generate_french_export(size);
        group.throughput(Throughput::Bytes(export.len() as u64));
        group.bench_with_input(BenchmarkId::new("french", size), &export, |b, export| {
            b.iter(|| parser.parse_str(black_box(export)).unwrap());
        });
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let export = generate_french_export(1_000);
    c.bench_function("detect_dialect", |b| {
        b.iter(|| detect_dialect_in(black_box(&export)));
    });
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let conv = ExportParser::new(Dialect::French)
        .parse_str(&generate_french_export(10_000))
        .unwrap();
    group.throughput(Throughput::Elements(conv.len() as u64));

    group.bench_function("message_count_by_author", |b| {
        b.iter(|| message_count_by_author(black_box(&conv)));
    });
    group.bench_function("moving_weekly_message_count", |b| {
        b.iter(|| moving_weekly_message_count(black_box(&conv)));
    });
    group.bench_function("mean_media_interval_by_author", |b| {
        b.iter(|| mean_media_interval_by_author(black_box(&conv), "<Media omitted>"));
    });
    group.bench_function("hourly_distribution", |b| {
        b.iter(|| hourly_distribution(black_box(&conv)));
    });
    group.bench_function("emoji_counts", |b| {
        b.iter(|| emoji_counts(black_box(&conv)));
    });
    group.bench_function("report", |b| {
        let config = AnalysisConfig::default();
        b.iter(|| Report::build(black_box(&conv), &config).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_detect, bench_stats);
criterion_main!(benches);
