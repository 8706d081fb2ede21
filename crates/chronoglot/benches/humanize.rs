use std::hint::black_box;

use chronoglot::{classify, Moment, RelativeFormatter};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_hours", |b| {
        b.iter(|| classify(black_box(6840.0)))
    });
    c.bench_function("classify_years", |b| {
        b.iter(|| classify(black_box(1.0e9)))
    });
}

fn bench_humanize(c: &mut Criterion) {
    let formatter = RelativeFormatter::new();
    let anchor = Moment::parse_rfc3339("2026-03-16T10:00:00Z").unwrap();
    let en = Moment::parse_rfc3339("2026-03-16T12:00:00Z").unwrap();
    let ru = Moment::parse_rfc3339("2026-03-16T12:00:00Z")
        .unwrap()
        .with_locale("ru".into());

    c.bench_function("to_now_en", |b| {
        b.iter(|| formatter.to_now_at(black_box(&en), black_box(&anchor)))
    });
    c.bench_function("to_now_ru_plural", |b| {
        b.iter(|| formatter.to_now_at(black_box(&ru), black_box(&anchor)))
    });
}

criterion_group!(benches, bench_classify, bench_humanize);
criterion_main!(benches);
