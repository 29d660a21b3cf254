//! Criterion benchmarks for the litrisk analyzer.
//!
//! Covers catalog construction, single-email analysis at a few sizes and
//! parallel batch analysis.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use litrisk::catalog::PatternCatalog;
use litrisk::engine::RiskAnalyzer;
use litrisk::record::EmailRecord;

const SENTENCES: [&str; 10] = [
    "Thanks for the update on the shipment.",
    "I admit we are responsible for the delay.",
    "Please review the attached invoice.",
    "We guarantee delivery by Friday.",
    "Let's discuss the settlement next week.",
    "This is a scam and you know it.",
    "The meeting moved to 3pm.",
    "Send me your password so I can log in.",
    "Pay up or else we will take legal action.",
    "Looking forward to working together.",
];

/// Build a body of `length` sentences with a pseudo-random mix.
fn generate_body(seed: usize, length: usize) -> String {
    (0..length)
        .map(|j| SENTENCES[(seed * 7 + j * 13) % SENTENCES.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate test emails for benchmarking.
fn generate_test_emails(count: usize) -> Vec<EmailRecord> {
    (0..count)
        .map(|i| EmailRecord::new(format!("Re: thread {i}"), generate_body(i, 5 + i % 40)))
        .collect()
}

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| black_box(PatternCatalog::build().unwrap()))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = RiskAnalyzer::new(Arc::new(PatternCatalog::build().unwrap()));
    let mut group = c.benchmark_group("analyze");

    for length in [5, 50, 500] {
        let body = generate_body(1, length);
        group.throughput(Throughput::Bytes(body.len() as u64));

        let email = EmailRecord::new("Re: status", body);
        group.bench_function(format!("sentences_{length}"), |b| {
            b.iter(|| black_box(analyzer.analyze(&email)))
        });
    }

    group.finish();
}

fn bench_analyze_batch(c: &mut Criterion) {
    let analyzer = RiskAnalyzer::new(Arc::new(PatternCatalog::build().unwrap()));
    let emails = generate_test_emails(1000);

    let mut group = c.benchmark_group("analyze_batch");
    group.throughput(Throughput::Elements(emails.len() as u64));
    group.bench_function("emails_1000", |b| {
        b.iter(|| black_box(analyzer.analyze_batch(&emails)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_build,
    bench_analyze,
    bench_analyze_batch
);
criterion_main!(benches);
