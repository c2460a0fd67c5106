use criterion::{criterion_group, criterion_main, Criterion};
use phrase_filter::PhraseMatcherBuilder;

fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("construction", |b| {
        b.iter(|| {
            PhraseMatcherBuilder::new()
                .phrases(include_str!("data/phrases.txt").lines())
                .clean_content(true)
                .build()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = builder_benchmark
}
criterion_main!(benches);
