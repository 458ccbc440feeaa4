use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Reference the main crate
extern crate chaintable;

// Import the hash functions from the main crate
use chaintable::hash::{bucket_index, crc32_hash, djb2_hash, fnv1a_hash, xxh64_hash};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let mut s = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        s.push(CHARSET[idx] as char);
    }

    s
}

// Benchmark digest functions with short strings
pub fn bench_short_strings(c: &mut Criterion) {
    let s = generate_random_string(10);

    let mut group = c.benchmark_group("ShortStrings");

    group.bench_function("djb2_hash", |b| b.iter(|| djb2_hash(black_box(&s))));
    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

// Benchmark digest functions with medium strings
pub fn bench_medium_strings(c: &mut Criterion) {
    let s = generate_random_string(100);

    let mut group = c.benchmark_group("MediumStrings");

    group.bench_function("djb2_hash", |b| b.iter(|| djb2_hash(black_box(&s))));
    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

// Benchmark digest functions with long strings
pub fn bench_long_strings(c: &mut Criterion) {
    let s = generate_random_string(1000);

    let mut group = c.benchmark_group("LongStrings");

    group.bench_function("djb2_hash", |b| b.iter(|| djb2_hash(black_box(&s))));
    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

// Benchmark bucket index derivation over a stream of formatted keys
pub fn bench_bucket_index(c: &mut Criterion) {
    let count = 1000;

    let mut group = c.benchmark_group("BucketIndex");

    for capacity in [2usize, 64, 4096] {
        group.bench_function(format!("capacity_{}", capacity), |b| {
            b.iter(|| {
                let mut rng = rand::thread_rng();
                for _ in 0..count {
                    let line_id = rng.gen_range(0..u32::MAX);
                    let key = format!("line_{}", line_id);
                    black_box(bucket_index(&key, capacity));
                }
            })
        });
    }

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(
    benches,
    bench_short_strings,
    bench_medium_strings,
    bench_long_strings,
    bench_bucket_index
);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
