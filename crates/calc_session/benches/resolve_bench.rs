use calc_session::{Batch, Resolver};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn benchmark_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    group.bench_function("parse_nested_parens", |b| {
        b.iter(|| black_box(calc_parser::parse("((((1 + 2) * 3) - 4) / 5) ^ 2").unwrap()))
    });

    group.finish();
}

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    group.bench_function("simple_sum", |b| {
        let mut resolver = Resolver::new();
        b.iter(|| black_box(resolver.resolve(black_box("1 + 2"), 0)))
    });

    group.bench_function("repeating_decimal", |b| {
        let mut resolver = Resolver::new();
        b.iter(|| black_box(resolver.resolve(black_box("2 / 3"), 0)))
    });

    group.bench_function("append_with_placeholders", |b| {
        let mut resolver = Resolver::new();
        b.iter(|| black_box(resolver.resolve(black_box("($ + #) * 1.5 ="), 7)))
    });

    group.bench_function("rejected_prose", |b| {
        let mut resolver = Resolver::new();
        let prose = "The quick brown fox jumps over 13 lazy dogs.";
        b.iter(|| black_box(resolver.resolve(black_box(prose), 0)))
    });

    group.bench_function("large_power", |b| {
        let mut resolver = Resolver::new();
        b.iter(|| black_box(resolver.resolve(black_box("7 ^ 1000 / 3 ^ 500"), 0)))
    });

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    group.bench_function("hundred_carets", |b| {
        let carets: Vec<Option<String>> = (0..100)
            .map(|i| if i % 10 == 9 { None } else { Some(format!("$ + # * {}", i)) })
            .collect();
        let mut resolver = Resolver::new();
        b.iter(|| {
            let mut batch = Batch::new(&mut resolver);
            black_box(batch.resolve_carets(carets.iter().map(|c| c.as_deref())))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parser,
    benchmark_resolution,
    benchmark_batch
);
criterion_main!(benches);
