use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shepherd_core::models::{ContentType, FilterContext};
use shepherd_validation::{ContentFilter, GuardrailValidator};

const SAMPLE: &str = "In Romans 8:28 Paul reminds the church that God works all things \
together for good. The Lord is faithful, and the Holy Spirit intercedes for us. \
Compare 1 Corinthians 13:4-7 and Mathew 5:3 for the shape of that love.";

fn bench_guardrail(c: &mut Criterion) {
    let v = GuardrailValidator::new();
    c.bench_function("guardrail_validate", |b| b.iter(|| v.validate(black_box(SAMPLE))));
}

fn bench_filter(c: &mut Criterion) {
    let f = ContentFilter::new();
    let ctx = FilterContext::new(ContentType::Explanation).with_scripture_references(true);
    c.bench_function("content_filter", |b| b.iter(|| f.filter(black_box(SAMPLE), &ctx)));
    c.bench_function("content_quick_check", |b| b.iter(|| f.quick_check(black_box(SAMPLE))));
}

criterion_group!(benches, bench_guardrail, bench_filter);
criterion_main!(benches);
