// Coarse-grained thread-safe wrapper around the hash table
//
// One mutex guards the whole table. The table itself is single-threaded
// by design; callers that need to share it take the lock around every
// operation, and no per-bucket locking is offered.

use parking_lot::Mutex;

use crate::table::{HashTable, Notifier, TableResult};

/// A hash table behind a single `parking_lot` mutex
pub struct SharedHashTable<V> {
    inner: Mutex<HashTable<V>>,
}

impl<V: Clone> SharedHashTable<V> {
    /// Create a new shared hash table with the specified number of buckets
    pub fn new(capacity: usize) -> TableResult<Self> {
        Ok(SharedHashTable {
            inner: Mutex::new(HashTable::new(capacity)?),
        })
    }

    /// Create a new shared hash table that reports notices through `notifier`
    pub fn with_notifier(capacity: usize, notifier: Box<dyn Notifier>) -> TableResult<Self> {
        Ok(SharedHashTable {
            inner: Mutex::new(HashTable::with_notifier(capacity, notifier)?),
        })
    }

    /// Store the value with the given key
    pub fn insert(&self, key: &str, value: V) {
        self.inner.lock().insert(key, value);
    }

    /// Retrieve a clone of the value stored with the given key
    ///
    /// The value is cloned out because the lock guard cannot outlive the
    /// call.
    pub fn retrieve(&self, key: &str) -> Option<V> {
        self.inner.lock().retrieve(key).cloned()
    }

    /// Remove the value stored with the given key
    pub fn remove(&self, key: &str) {
        self.inner.lock().remove(key);
    }

    /// Double the capacity of the table and rehash all entries
    pub fn resize(&self) {
        self.inner.lock().resize();
    }

    /// Number of buckets in the table
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Number of live entries in the table
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
