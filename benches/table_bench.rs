//! Benchmarks for namecache lookup operations

use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use namecache::{LookupTable, Name, Record};

const TABLE_ENTRIES: usize = 10_000;

fn populated_table() -> (LookupTable, Vec<Name>) {
    let table = LookupTable::new();
    let names: Vec<Name> = (0..TABLE_ENTRIES)
        .map(|i| Name::new(format!("host{:05}.example.com", i)).unwrap())
        .collect();

    for (i, name) in names.iter().enumerate() {
        table
            .upsert(
                name.clone(),
                Record::new(format!("10.0.{}.{}", (i / 256) % 256, i % 256)),
            )
            .unwrap();
    }

    (table, names)
}

fn bench_find(c: &mut Criterion) {
    let (table, names) = populated_table();
    let missing = Name::new("missing.example.org").unwrap();

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let name = &names[i % names.len()];
            i += 1;
            black_box(table.find(name))
        })
    });

    group.bench_function("miss", |b| b.iter(|| black_box(table.find(&missing))));

    group.finish();
}

fn bench_upsert(c: &mut Criterion) {
    let (table, names) = populated_table();
    let record = Record::new("10.1.2.3");

    let mut group = c.benchmark_group("upsert");
    group.throughput(Throughput::Elements(1));

    group.bench_function("overwrite", |b| {
        let mut i = 0;
        b.iter(|| {
            let name = names[i % names.len()].clone();
            i += 1;
            table.upsert(name, record.clone()).unwrap()
        })
    });

    group.finish();
}

/// Read throughput across reader-thread counts. With one RwLock in shared
/// mode this should scale with threads rather than serialize.
fn bench_concurrent_find(c: &mut Criterion) {
    let (table, names) = populated_table();

    let mut group = c.benchmark_group("concurrent_find");
    for threads in [1usize, 2, 4, 8] {
        // One element per thread per iteration.
        group.throughput(Throughput::Elements(threads as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter_custom(|iters| {
                    let start = Instant::now();
                    crossbeam::scope(|s| {
                        for t in 0..threads {
                            let table = &table;
                            let names = &names;
                            s.spawn(move |_| {
                                for i in 0..iters {
                                    let idx = (t as u64 * 7919 + i) as usize % names.len();
                                    black_box(table.find(&names[idx]));
                                }
                            });
                        }
                    })
                    .unwrap();
                    start.elapsed()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_find, bench_upsert, bench_concurrent_find);
criterion_main!(benches);
