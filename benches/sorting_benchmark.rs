use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use mapsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort By Value");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let few_distinct: IndexMap<u32, u16> =
        (0..count).map(|k| (k, rng.random_range(0..64))).collect();
    let all_distinct: IndexMap<u32, u64> = (0..count).map(|k| (k, rng.random())).collect();

    group.bench_function("mapsort (64 buckets)", |b| {
        b.iter(|| sort_by_value(black_box(&few_distinct), Direction::Ascending))
    });

    group.bench_function("slice::sort_by (64 buckets)", |b| {
        b.iter(|| {
            let mut entries: Vec<(u32, u16)> =
                black_box(&few_distinct).iter().map(|(k, v)| (*k, *v)).collect();
            entries.sort_by(|a, b| a.1.cmp(&b.1));
            entries.into_iter().collect::<IndexMap<_, _>>()
        })
    });

    group.bench_function("mapsort (distinct)", |b| {
        b.iter(|| sort_by_value(black_box(&all_distinct), Direction::Ascending))
    });

    group.bench_function("slice::sort_by (distinct)", |b| {
        b.iter(|| {
            let mut entries: Vec<(u32, u64)> =
                black_box(&all_distinct).iter().map(|(k, v)| (*k, *v)).collect();
            entries.sort_by(|a, b| a.1.cmp(&b.1));
            entries.into_iter().collect::<IndexMap<_, _>>()
        })
    });

    group.finish();
}

fn bench_property(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort By Property");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let words: IndexMap<u32, String> = (0..count)
        .map(|k| {
            let len = rng.random_range(5..20);
            (k, (0..len).map(|_| rng.random::<char>()).collect())
        })
        .collect();

    group.bench_function("mapsort (char count)", |b| {
        b.iter(|| {
            sort_by_property(
                black_box(&words),
                |w: &String| w.chars().count(),
                Direction::Descending,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_values, bench_property);
criterion_main!(benches);
