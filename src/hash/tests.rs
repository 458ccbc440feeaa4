use super::*;

#[test]
fn test_djb2_known_values() {
    // Seed only: empty input never touches the accumulator
    assert_eq!(djb2_hash(""), 5381);

    // Single byte: 5381 * 33 + 'a'
    assert_eq!(djb2_hash("a"), 5381 * 33 + b'a' as u64);

    // Two bytes, accumulated in order
    let ab = (5381u64 * 33 + b'a' as u64) * 33 + b'b' as u64;
    assert_eq!(djb2_hash("ab"), ab);
}

#[test]
fn test_djb2_deterministic() {
    // The same string always produces the same hash
    let s = "hello world";
    let hash1 = djb2_hash(s);
    let hash2 = djb2_hash(s);
    let hash3 = djb2_hash(s);

    assert_eq!(hash1, hash2);
    assert_eq!(hash2, hash3);
}

#[test]
fn test_djb2_different_strings() {
    // Different strings should produce different hashes
    let s1 = "hello";
    let s2 = "world";
    let s3 = "hello world";

    assert_ne!(djb2_hash(s1), djb2_hash(s2));
    assert_ne!(djb2_hash(s2), djb2_hash(s3));
    assert_ne!(djb2_hash(s1), djb2_hash(s3));
}

#[test]
fn test_djb2_order_sensitive() {
    // Byte order matters: "ab" and "ba" accumulate differently
    assert_ne!(djb2_hash("ab"), djb2_hash("ba"));
}

#[test]
fn test_djb2_long_string_wraps() {
    // A long input overflows 64 bits many times over; wrapping keeps it total
    let s = "x".repeat(10_000);
    let hash = djb2_hash(&s);

    assert_eq!(hash, djb2_hash(&s));
}

#[test]
fn test_bucket_index_in_range() {
    let keys = ["", "a", "line_1", "line_2", "line_3", "some longer key text"];

    for capacity in 1..64usize {
        for key in keys {
            let index = bucket_index(key, capacity);
            assert!(index < capacity, "index {} out of range for capacity {}", index, capacity);
        }
    }
}

#[test]
fn test_bucket_index_follows_digest() {
    // The index is exactly the digest reduced modulo the capacity
    for capacity in [1usize, 2, 7, 16, 1024] {
        let key = "line_1";
        assert_eq!(
            bucket_index(key, capacity),
            (djb2_hash(key) % capacity as u64) as usize
        );
    }
}

#[test]
fn test_fnv1a_deterministic() {
    let s = "hello world";
    assert_eq!(fnv1a_hash(s), fnv1a_hash(s));

    // Empty string hashes to the offset basis
    assert_eq!(fnv1a_hash(""), 14695981039346656037);
}

#[test]
fn test_alternate_hashes_consistent() {
    let s = "test string";

    assert_eq!(xxh64_hash(s), xxh64_hash(s));
    assert_eq!(crc32_hash(s), crc32_hash(s));

    // The alternates are distinct algorithms and disagree with djb2
    assert_ne!(xxh64_hash(s), djb2_hash(s));
}
