//! Chaintable library
//!
//! A string-keyed hash table with separate chaining and caller-driven
//! capacity doubling, plus the string digest functions it is built on.

// String digest functions and bucket index derivation
pub mod hash;

// The chained hash table itself
pub mod table;

// Coarse-grained thread-safe wrapper
pub mod sync;

// Re-export table items for easier access
pub use table::{HashTable, Notifier, StderrNotifier};
pub use table::{TableError, TableResult};

// Re-export the sync wrapper for easier access
pub use sync::SharedHashTable;
