use criterion::{Criterion, criterion_group, criterion_main};
use reanchor_engine::{Resolver, fuzzy_find, similarity};
mod common;

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    let a = "The paragraph closes by restating point 42 in other words.";
    let b = "The paragraph closes by re-stating point 42 in different words.";
    group.bench_function("sentence_pair", |bench| {
        bench.iter(|| similarity(std::hint::black_box(a), std::hint::black_box(b)));
    });

    group.finish();
}

fn bench_fuzzy_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_find");
    group.sample_size(10);

    let document = common::generate_document(10);
    group.bench_function("context_in_10_paragraphs", |b| {
        b.iter(|| {
            fuzzy_find(
                std::hint::black_box(&document),
                "opens with a topic-sentence about item 7",
                0.7,
            )
        });
    });

    group.finish();
}

fn bench_resolve_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all");
    group.sample_size(10);

    let resolver = Resolver::default();
    let original = common::generate_document(20);
    let anchors = common::anchors_for(&original, 20);
    let edited = common::lightly_edit(&original);

    group.bench_function("unchanged_20", |b| {
        b.iter(|| resolver.resolve_all(std::hint::black_box(&original), &anchors));
    });
    group.bench_function("edited_20", |b| {
        b.iter(|| resolver.resolve_all(std::hint::black_box(&edited), &anchors));
    });
    group.bench_function("segments_edited_20", |b| {
        b.iter(|| resolver.resolve_segments(std::hint::black_box(&edited), &anchors));
    });

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_fuzzy_find, bench_resolve_all);
criterion_main!(benches);
