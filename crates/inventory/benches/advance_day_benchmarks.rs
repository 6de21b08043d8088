use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gilded_rose_inventory::fixtures::standard_items;
use gilded_rose_inventory::{Category, Item, advance_day};

/// Repeat the standard stock until `len` items.
fn stock(len: usize) -> Vec<Item> {
    standard_items().into_iter().cycle().take(len).collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for len in [9usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut items = stock(len);
            b.iter(|| advance_day(black_box(&mut items)));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let names: Vec<String> = standard_items()
        .into_iter()
        .map(|i| i.name().to_string())
        .collect();

    c.bench_function("classify_standard_names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(Category::classify(black_box(name)));
            }
        })
    });
}

criterion_group!(benches, bench_advance_day, bench_classify);
criterion_main!(benches);
