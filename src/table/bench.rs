use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::sync::Arc;
use std::thread;

// Import the table and its thread-safe wrapper from the crate
use chaintable::{HashTable, SharedHashTable};

// Test configuration
const THREAD_COUNT: usize = 8;
const OPERATIONS_PER_THREAD: usize = 10_000;
const ENTRY_COUNT: usize = 10_000;

// Generate random keys of the shape the table usually sees
fn generate_keys(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| format!("line_{}", rng.gen_range(0..u32::MAX)))
        .collect()
}

// Benchmark insertions into a well-sized table
pub fn bench_insert(c: &mut Criterion) {
    let keys = generate_keys(ENTRY_COUNT);

    let mut group = c.benchmark_group("Insert");

    group.bench_function("WellSized", |b| {
        b.iter(|| {
            let mut table = HashTable::new(ENTRY_COUNT).unwrap();
            for key in &keys {
                table.insert(key, "test_value");
            }
        });
    });

    // Undersized table: long chains, same insert cost since insert never
    // walks the chain
    group.bench_function("Undersized", |b| {
        b.iter(|| {
            let mut table = HashTable::new(16).unwrap();
            for key in &keys {
                table.insert(key, "test_value");
            }
        });
    });

    group.finish();
}

// Benchmark retrievals at different load factors
pub fn bench_retrieve(c: &mut Criterion) {
    let keys = generate_keys(ENTRY_COUNT);

    let mut group = c.benchmark_group("Retrieve");

    for capacity in [16usize, 1024, ENTRY_COUNT] {
        let mut table = HashTable::new(capacity).unwrap();
        for key in &keys {
            table.insert(key, "test_value");
        }

        group.bench_function(format!("capacity_{}", capacity), |b| {
            b.iter(|| {
                for key in &keys {
                    black_box(table.retrieve(key));
                }
            });
        });
    }

    group.finish();
}

// Benchmark the cost of a full doubling rehash
pub fn bench_resize(c: &mut Criterion) {
    let keys = generate_keys(ENTRY_COUNT);

    let mut group = c.benchmark_group("Resize");

    group.bench_function("Double", |b| {
        b.iter_with_setup(
            || {
                let mut table = HashTable::new(ENTRY_COUNT / 4).unwrap();
                for key in &keys {
                    table.insert(key, "test_value");
                }
                table
            },
            |mut table| {
                table.resize();
                table
            },
        );
    });

    group.finish();
}

// Benchmark concurrent insertions through the coarse-grained wrapper
pub fn bench_concurrent_insertions(c: &mut Criterion) {
    let mut group = c.benchmark_group("ConcurrentInsertions");

    group.bench_function("SharedHashTable", |b| {
        b.iter(|| {
            let table = Arc::new(
                SharedHashTable::new(THREAD_COUNT * OPERATIONS_PER_THREAD).unwrap(),
            );

            // Spawn threads for concurrent insertions
            let handles: Vec<_> = (0..THREAD_COUNT)
                .map(|thread_id| {
                    let table = table.clone();
                    thread::spawn(move || {
                        for i in 0..OPERATIONS_PER_THREAD {
                            let key = format!("{}-{}", thread_id, i);
                            table.insert(&key, "test_value");
                        }
                    })
                })
                .collect();

            // Wait for all threads to complete
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(
    benches,
    bench_insert,
    bench_retrieve,
    bench_resize,
    bench_concurrent_insertions
);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
