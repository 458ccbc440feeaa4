// Hash functions for string keys

/// djb2 hash implementation for strings
/// Returns a 64-bit integer hash value
///
/// This is the digest the table uses for bucket indexing. It must stay
/// deterministic across runs, so the process-seeded standard hasher is
/// deliberately not used here.
pub fn djb2_hash(s: &str) -> u64 {
    // djb2 seed
    const DJB2_SEED: u64 = 5381;

    let mut hash = DJB2_SEED;

    // hash = hash * 33 + byte, with wrapping arithmetic on overflow
    for byte in s.as_bytes() {
        hash = hash
            .wrapping_mul(33)
            .wrapping_add(*byte as u64);
    }

    hash
}

/// Map a key to a bucket index in `[0, capacity)`
///
/// The digest is unsigned, so the modulo is already non-negative.
/// `capacity` must be positive; the table constructor guarantees this.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    (djb2_hash(key) % capacity as u64) as usize
}

/// FNV-1a hash implementation for strings
/// Returns a 64-bit integer hash value
///
/// Comparison alternate only; never consulted for bucket indexing.
pub fn fnv1a_hash(s: &str) -> u64 {
    // FNV-1a constants
    const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    let mut hash = FNV_OFFSET_BASIS;

    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// xxHash64 for strings, via the xxhash-rust crate
/// Comparison alternate only
pub fn xxh64_hash(s: &str) -> u64 {
    xxhash_rust::xxh64::xxh64(s.as_bytes(), 0)
}

/// CRC32 digest for strings, via the crc32fast crate
/// Comparison alternate only
pub fn crc32_hash(s: &str) -> u32 {
    crc32fast::hash(s.as_bytes())
}
