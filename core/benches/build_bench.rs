use criterion::{criterion_group, criterion_main, Criterion};
use keyidx::{top5_search, IndexBuilder, NoiseWords};

const WORDS: &[&str] = &["ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen", "ibis", "jay"];

fn corpus() -> Vec<(String, Vec<String>)> {
    (0..500)
        .map(|d| {
            let tokens = (0..200).map(|t| WORDS[(d * 7 + t * t) % WORDS.len()].to_string()).collect();
            (format!("doc{d}"), tokens)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let docs = corpus();
    c.bench_function("build_500_docs", |b| {
        b.iter(|| {
            let mut builder = IndexBuilder::new(NoiseWords::new());
            for (id, tokens) in &docs {
                builder.add_document(id, tokens);
            }
            builder.finish()
        })
    });

    let mut builder = IndexBuilder::new(NoiseWords::new());
    for (id, tokens) in &docs {
        builder.add_document(id, tokens);
    }
    let index = builder.finish();
    c.bench_function("top5_search", |b| b.iter(|| top5_search(&index, "bee", "fox")));
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
