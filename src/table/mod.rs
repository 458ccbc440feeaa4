// Chained hash table with string keys and caller-driven capacity doubling

use crate::hash::bucket_index;

// Re-export error types and result type
pub mod error;
pub use error::{TableError, TableResult};

/// A single key/value entry in a bucket chain
///
/// Each entry exclusively owns its successor, so a chain is torn down
/// link by link and no entry is ever shared between chains.
struct Entry<V> {
    key: String,
    value: V,
    next: Option<Box<Entry<V>>>,
}

impl<V> Entry<V> {
    /// Create a new chain entry with no successor
    fn new(key: String, value: V) -> Self {
        Entry {
            key,
            value,
            next: None,
        }
    }
}

/// Diagnostic side channel for non-fatal notices
///
/// Removing an absent key is reported here instead of failing the
/// operation. The default implementation writes to stderr; tests plug in
/// a recording implementation so nothing has to capture console output.
pub trait Notifier: Send {
    /// Report a non-fatal notice
    fn notify(&self, message: &str);
}

/// Default notifier that writes notices to stderr
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Hash table structure
///
/// `capacity` buckets of singly linked chains, indexed by the djb2 digest
/// of the key modulo the current capacity. Growth only happens when the
/// caller asks for it via [`HashTable::resize`]; insert never grows the
/// table on its own.
pub struct HashTable<V> {
    /// Number of buckets
    capacity: usize,
    /// One slot per bucket, each holding the head of a chain or nothing
    storage: Vec<Option<Box<Entry<V>>>>,
    /// Number of live entries across all chains
    len: usize,
    /// Sink for non-fatal notices
    notifier: Box<dyn Notifier>,
}

impl<V> HashTable<V> {
    /// Create a new hash table with the specified number of buckets
    ///
    /// Fails with [`TableError::ZeroCapacity`] if `capacity` is zero,
    /// since a zero-bucket table has no valid index space.
    pub fn new(capacity: usize) -> TableResult<Self> {
        Self::with_notifier(capacity, Box::new(StderrNotifier))
    }

    /// Create a new hash table that reports notices through `notifier`
    pub fn with_notifier(capacity: usize, notifier: Box<dyn Notifier>) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }

        let mut storage = Vec::with_capacity(capacity);
        storage.resize_with(capacity, || None);

        Ok(HashTable {
            capacity,
            storage,
            len: 0,
            notifier,
        })
    }

    /// Number of buckets in the table
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push an entry onto the front of the chain at `index`
    ///
    /// Both insert and resize place entries through this, so chains grow
    /// newest-first everywhere.
    fn push_front(storage: &mut [Option<Box<Entry<V>>>], index: usize, mut entry: Box<Entry<V>>) {
        entry.next = storage[index].take();
        storage[index] = Some(entry);
    }

    /// Store the value with the given key
    ///
    /// Collisions chain at the front of the bucket, so the newest entry is
    /// found first. The existing chain is NOT searched for a matching key:
    /// inserting the same key twice stacks two entries, and the newer one
    /// shadows the older on retrieval until it is removed. This shadowing
    /// is intended chain behavior, not a defect to fix here.
    pub fn insert(&mut self, key: &str, value: V) {
        let index = bucket_index(key, self.capacity);
        let entry = Box::new(Entry::new(key.to_owned(), value));

        Self::push_front(&mut self.storage, index, entry);
        self.len += 1;
    }

    /// Retrieve the value stored with the given key
    ///
    /// Walks the chain from the head and returns the first exact match.
    /// A missing key is an expected outcome, reported as `None`.
    pub fn retrieve(&self, key: &str) -> Option<&V> {
        let index = bucket_index(key, self.capacity);

        let mut current = self.storage[index].as_deref();
        while let Some(entry) = current {
            if entry.key == key {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }

        None
    }

    /// Remove the value stored with the given key
    ///
    /// Unlinks the first matching entry walking from the chain head; if
    /// duplicates of the key exist, the older ones stay reachable and the
    /// next one resurfaces on lookup. Removing an absent key is non-fatal:
    /// a notice goes to the notifier and the table is left unchanged.
    pub fn remove(&mut self, key: &str) {
        let index = bucket_index(key, self.capacity);

        // Head of the chain matches: the slot takes the successor
        let head_matches = match self.storage[index].as_ref() {
            Some(entry) => entry.key == key,
            None => false,
        };
        if head_matches {
            if let Some(head) = self.storage[index].take() {
                self.storage[index] = head.next;
                self.len -= 1;
            }
            return;
        }

        // Interior match: look one link ahead so the predecessor can relink
        let mut current = self.storage[index].as_deref_mut();
        while let Some(entry) = current {
            let next_matches = match entry.next.as_ref() {
                Some(next) => next.key == key,
                None => false,
            };
            if next_matches {
                if let Some(removed) = entry.next.take() {
                    entry.next = removed.next;
                    self.len -= 1;
                }
                return;
            }
            current = entry.next.as_deref_mut();
        }

        self.notifier
            .notify(&format!("entry with key: {} does not exist!", key));
    }

    /// Double the capacity of the table and rehash all entries
    ///
    /// Every entry is re-placed under the new capacity with the same
    /// push-front insert the table always uses, so same-bucket order after
    /// a resize may differ from before. The new storage is fully built
    /// before the table is touched; if allocation fails, the table is
    /// still valid at its old capacity.
    pub fn resize(&mut self) {
        let new_capacity = self.capacity * 2;

        let mut new_storage: Vec<Option<Box<Entry<V>>>> = Vec::with_capacity(new_capacity);
        new_storage.resize_with(new_capacity, || None);

        // Full rehash: every chain, head to tail, re-placed under the new
        // capacity
        let old_storage = std::mem::take(&mut self.storage);
        for slot in old_storage {
            let mut current = slot;
            while let Some(mut entry) = current {
                current = entry.next.take();

                let index = bucket_index(&entry.key, new_capacity);
                Self::push_front(&mut new_storage, index, entry);
            }
        }

        self.storage = new_storage;
        self.capacity = new_capacity;
    }
}

/// Retrieval sugar over [`HashTable::retrieve`]
///
/// Panics on an absent key; use `retrieve` when a missing key is expected.
impl<V> std::ops::Index<&str> for HashTable<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        match self.retrieve(key) {
            Some(value) => value,
            None => panic!("no entry found for key: {}", key),
        }
    }
}

/// Implement Drop to tear chains down iteratively
///
/// The default recursive drop of an owned-successor chain can overflow
/// the stack on a very long chain.
impl<V> Drop for HashTable<V> {
    fn drop(&mut self) {
        for slot in &mut self.storage {
            let mut current = slot.take();
            while let Some(mut entry) = current {
                current = entry.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
