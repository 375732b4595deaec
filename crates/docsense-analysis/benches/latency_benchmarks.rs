//! Latency benchmarks for the local analysis engine
//!
//! Run with: cargo bench -p docsense-analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

use docsense_analysis::{
    EntityExtractor, FallbackCoordinator, KeyPhraseExtractor, LocalEngine, SentimentScorer,
};

fn sample_texts() -> Vec<(&'static str, String)> {
    let short = "Contact me at a@b.com or call 555-123-4567".to_string();
    let medium = "The quarterly review was great. Revenue growth was excellent, although \
                  the support backlog remains a concern. Jane Doe will present on 3/14/2025 \
                  at https://intranet.example.com/reviews and the quarterly review notes \
                  will follow."
        .to_string();
    let long = medium.repeat(40);
    vec![("short", short), ("medium", medium), ("long", long)]
}

fn benchmark_local_components(c: &mut Criterion) {
    let sentiment = SentimentScorer::new();
    let key_phrases = KeyPhraseExtractor::new();
    let entities = EntityExtractor::new().expect("Failed to compile entity patterns");

    let mut group = c.benchmark_group("Local_Components");
    group.sample_size(100);

    for (name, text) in sample_texts() {
        group.bench_with_input(BenchmarkId::new("sentiment", name), &text, |b, text| {
            b.iter(|| sentiment.score(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("key_phrases", name), &text, |b, text| {
            b.iter(|| key_phrases.extract(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("entities", name), &text, |b, text| {
            b.iter(|| entities.extract(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_coordinator_local_path(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let engine = LocalEngine::new().expect("Failed to build local engine");
    let coordinator = FallbackCoordinator::local_only_engine(engine);

    let mut group = c.benchmark_group("Coordinator_Local_Path");

    for (name, text) in sample_texts() {
        group.bench_with_input(BenchmarkId::new("analyze_document", name), &text, |b, text| {
            b.iter(|| rt.block_on(coordinator.analyze_document(black_box(text))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_local_components,
    benchmark_coordinator_local_path
);
criterion_main!(benches);
