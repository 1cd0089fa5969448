//! # Parse Path Benchmarks
//!
//! | Benchmark | Measures |
//! |-----------|----------|
//! | `parse/<type>` | Full pipeline for a realistic payload |
//! | `registry/resolve` | Discriminator lookup alone |
//! | `reject/*` | Cost of the early-exit paths |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use skill_request::{resolve, supported_request_types, RequestParser, RequestParsingApi};
use skill_tests::fixtures::{self, CERT_URL, SIGNATURE};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = RequestParser::default();

    let payloads = [
        ("IntentRequest", fixtures::body(fixtures::intent_request())),
        ("LaunchRequest", fixtures::body(fixtures::launch_request())),
        (
            "AudioPlayer.PlaybackFailed",
            fixtures::sessionless_body(fixtures::playback_failed_request()),
        ),
    ];

    for (name, body) in &payloads {
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), body, |b, body| {
            b.iter(|| black_box(parser.parse(black_box(body), CERT_URL, SIGNATURE).is_ok()))
        });
    }

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let types = supported_request_types();
    c.bench_function("registry/resolve", |b| {
        b.iter(|| {
            for request_type in &types {
                black_box(resolve(black_box(request_type)).is_ok());
            }
        })
    });
}

fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject");
    let parser = RequestParser::default();

    let unknown = fixtures::body(json!({ "type": "CanFulfillIntentRequest" }));
    group.bench_function("unknown_type", |b| {
        b.iter(|| black_box(parser.parse(black_box(&unknown), CERT_URL, SIGNATURE).is_err()))
    });

    let unsigned = fixtures::body(fixtures::intent_request());
    group.bench_function("missing_headers", |b| {
        b.iter(|| black_box(parser.parse(black_box(&unsigned), "", "").is_err()))
    });

    let oversized = "x".repeat(256 * 1024);
    group.bench_function("oversized_body", |b| {
        b.iter(|| black_box(parser.parse(black_box(&oversized), CERT_URL, SIGNATURE).is_err()))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_registry, bench_rejections);
criterion_main!(benches);
