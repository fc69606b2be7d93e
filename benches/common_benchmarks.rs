use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
type RandomState = hashbrown::DefaultHashBuilder;
type Bimap<K, V> = unordered_bimap::bimap::UnorderedBimap<K, V, RandomState, RandomState>;

type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

const SIZES: &[usize] = &[10000];

/// Ordered bimap baseline: the forward map keeps insertion order, the reverse
/// map only answers value lookups.
#[derive(Default)]
struct IndexMapPair {
    forward: IndexMap<usize, usize>,
    reverse: IndexMap<usize, usize>,
}

impl IndexMapPair {
    fn with_capacity(capacity: usize) -> Self {
        IndexMapPair {
            forward: IndexMap::with_capacity_and_hasher(capacity, RandomState::default()),
            reverse: IndexMap::with_capacity_and_hasher(capacity, RandomState::default()),
        }
    }

    fn insert(&mut self, key: usize, value: usize) -> bool {
        if self.forward.contains_key(&key) || self.reverse.contains_key(&value) {
            return false;
        }
        self.forward.insert(key, value);
        self.reverse.insert(value, key);
        true
    }

    fn remove_left(&mut self, key: &usize) -> Option<usize> {
        let value = self.forward.shift_remove(key)?;
        self.reverse.swap_remove(&value);
        Some(value)
    }
}

fn filled_bimap(size: usize) -> Bimap<usize, usize> {
    let mut bimap = Bimap::default();
    for i in 0..size {
        bimap.insert(i, i * 2);
    }
    bimap
}

fn filled_pair(size: usize) -> IndexMapPair {
    let mut pair = IndexMapPair::default();
    for i in 0..size {
        pair.insert(i, i * 2);
    }
    pair
}

fn bench_insertion_at_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_at_end");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            b.iter(|| {
                let mut bimap: Bimap<usize, usize> = Bimap::default();
                for i in 0..size {
                    bimap.insert(black_box(i), black_box(i * 2));
                }
                bimap
            })
        });

        group.bench_with_input(
            BenchmarkId::new("unordered_bimap_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut bimap: Bimap<usize, usize> = unordered_bimap::Builder::new()
                        .with_capacity(size)
                        .build();
                    for i in 0..size {
                        bimap.insert(black_box(i), black_box(i * 2));
                    }
                    bimap
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unordered_bimap_small_buckets", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut bimap: Bimap<usize, usize> = unordered_bimap::Builder::new()
                        .with_bucket_count(NonZeroUsize::new(1021).unwrap())
                        .build();
                    for i in 0..size {
                        bimap.insert(black_box(i), black_box(i * 2));
                    }
                    bimap
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            b.iter(|| {
                let mut pair = IndexMapPair::default();
                for i in 0..size {
                    pair.insert(black_box(i), black_box(i * 2));
                }
                pair.forward.len()
            })
        });

        group.bench_with_input(
            BenchmarkId::new("indexmap_pair_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut pair = IndexMapPair::with_capacity(size);
                    for i in 0..size {
                        pair.insert(black_box(i), black_box(i * 2));
                    }
                    pair.forward.len()
                })
            },
        );
    }

    group.finish();
}

fn bench_rejected_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejected_insertion");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            let mut bimap = filled_bimap(size);
            b.iter(|| {
                for i in 0..size {
                    black_box(bimap.insert(black_box(size + i), black_box(i * 2)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            let mut pair = filled_pair(size);
            b.iter(|| {
                for i in 0..size {
                    black_box(pair.insert(black_box(size + i), black_box(i * 2)));
                }
            })
        });
    }

    group.finish();
}

fn bench_lookup_both_sides(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_both_sides");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64 * 2));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            let bimap = filled_bimap(size);
            b.iter(|| {
                for i in 0..size {
                    black_box(bimap.get_left(black_box(&i)));
                    black_box(bimap.get_right(black_box(&(i * 2))));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            let pair = filled_pair(size);
            b.iter(|| {
                for i in 0..size {
                    black_box(pair.forward.get(black_box(&i)));
                    black_box(pair.reverse.get(black_box(&(i * 2))));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove_from_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_from_middle");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64 / 2));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_bimap(size),
                |mut bimap| {
                    for i in (size / 4)..(size * 3 / 4) {
                        black_box(bimap.erase_left(black_box(&i)));
                    }
                    bimap
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            b.iter_batched(
                || filled_pair(size),
                |mut pair| {
                    for i in (size / 4)..(size * 3 / 4) {
                        black_box(pair.remove_left(black_box(&i)));
                    }
                    pair.forward.len()
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_pop_from_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_from_front");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_bimap(size),
                |mut bimap| {
                    while let Some(pair) = bimap.pop_front() {
                        black_box(pair);
                    }
                    bimap
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            b.iter_batched(
                || filled_pair(size),
                |mut pair| {
                    while let Some((key, value)) = pair.forward.shift_remove_index(0) {
                        pair.reverse.swap_remove(&value);
                        black_box(key);
                    }
                    pair.forward.len()
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration_full");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            let bimap = filled_bimap(size);
            b.iter(|| {
                for (k, v) in bimap.iter() {
                    black_box((k, v));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            let pair = filled_pair(size);
            b.iter(|| {
                for (k, v) in pair.forward.iter() {
                    black_box((k, v));
                }
            })
        });
    }

    group.finish();
}

fn bench_iteration_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration_sparse");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64 / 2));

        group.bench_with_input(BenchmarkId::new("unordered_bimap", size), &size, |b, &size| {
            let mut bimap = filled_bimap(size);
            bimap.retain(|k, _| k % 2 == 0);
            b.iter(|| {
                for (k, v) in bimap.iter() {
                    black_box((k, v));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            let mut pair = filled_pair(size);
            for i in (1..size).step_by(2) {
                pair.remove_left(&i);
            }
            b.iter(|| {
                for (k, v) in pair.forward.iter() {
                    black_box((k, v));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion_at_end,
    bench_rejected_insertion,
    bench_lookup_both_sides,
    bench_remove_from_middle,
    bench_pop_from_front,
    bench_iteration_full,
    bench_iteration_sparse,
);
criterion_main!(benches);
