use super::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_table_basic() {
    let table = SharedHashTable::new(8).unwrap();

    table.insert("alpha", 1);
    table.insert("beta", 2);

    assert_eq!(table.retrieve("alpha"), Some(1));
    assert_eq!(table.retrieve("beta"), Some(2));
    assert_eq!(table.retrieve("gamma"), None);
    assert_eq!(table.len(), 2);

    table.remove("alpha");
    assert_eq!(table.retrieve("alpha"), None);
    assert_eq!(table.len(), 1);

    table.resize();
    assert_eq!(table.capacity(), 16);
    assert_eq!(table.retrieve("beta"), Some(2));
}

#[test]
fn test_shared_table_zero_capacity_rejected() {
    assert!(SharedHashTable::<i32>::new(0).is_err());
}

#[test]
fn test_concurrent_inserts_all_land() {
    const THREAD_COUNT: usize = 8;
    const PER_THREAD: usize = 500;

    let table = Arc::new(SharedHashTable::new(64).unwrap());

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let table = table.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let key = format!("{}-{}", thread_id, i);
                    table.insert(&key, thread_id * PER_THREAD + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), THREAD_COUNT * PER_THREAD);
    for thread_id in 0..THREAD_COUNT {
        for i in 0..PER_THREAD {
            let key = format!("{}-{}", thread_id, i);
            assert_eq!(table.retrieve(&key), Some(thread_id * PER_THREAD + i));
        }
    }
}

#[test]
fn test_concurrent_readers_and_resize() {
    let table = Arc::new(SharedHashTable::new(4).unwrap());

    for i in 0..100 {
        table.insert(&format!("key_{}", i), i);
    }

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let table = table.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    assert_eq!(table.retrieve(&format!("key_{}", i)), Some(i));
                }
            })
        })
        .collect();

    // Grow while readers hammer the table; the coarse lock serializes it
    table.resize();

    for handle in readers {
        handle.join().unwrap();
    }

    assert_eq!(table.capacity(), 8);
    assert_eq!(table.len(), 100);
}
