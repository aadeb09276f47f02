//! Concurrent readers and writers

use std::sync::{Arc, Barrier};
use std::thread;

use crate::db;
use nestkv::{encode_natural, resolver, Error};

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn concurrent_puts_all_land() {
    let db = Arc::new(db());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let db = Arc::clone(&db);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let shelf = format!("thread{}", t);
                for i in 0..PER_THREAD {
                    let key = encode_natural(&format!("item{}", i));
                    db.put(&[b"shared", shelf.as_bytes()], &key, b"v", false)
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stats = db.stats();
    assert_eq!(stats.values, THREADS * PER_THREAD);
    // "shared" plus one bucket per thread
    assert_eq!(stats.buckets, THREADS + 1);
    assert_eq!(db.version(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn racing_puts_without_overwrite_create_once() {
    let db = Arc::new(db());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let db = Arc::clone(&db);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                db.put(&[b"lock"], b"owner", format!("{}", t).as_bytes(), false)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| matches!(r, Ok(true))).count();
    let losers = results
        .iter()
        .filter(|r| matches!(r, Err(e) if e.is_exists()))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(losers, THREADS - 1);
}

#[test]
fn read_modify_write_in_update_is_serialized() {
    let db = Arc::new(db());
    db.put(&[b"counters"], b"hits", &0u64.to_be_bytes(), false)
        .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    db.update(|root| {
                        let current = resolver::get(root, &[b"counters"], b"hits")
                            .and_then(|v| <[u8; 8]>::try_from(v).ok())
                            .map(u64::from_be_bytes)
                            .ok_or_else(|| Error::Malformed("counter missing".to_string()))?;
                        resolver::put(
                            root,
                            &[b"counters"],
                            b"hits",
                            &(current + 1).to_be_bytes(),
                            true,
                        )
                    })
                    .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let hits = db.get(&[b"counters"], b"hits").unwrap();
    assert_eq!(hits, ((THREADS * PER_THREAD) as u64).to_be_bytes().to_vec());
}

#[test]
fn readers_see_consistent_snapshots() {
    let db = Arc::new(db());
    // invariant maintained by every writer: "a" and "b" hold the same value
    db.update(|root| {
        resolver::put(root, &[b"pair"], b"a", &0u32.to_be_bytes(), false)?;
        resolver::put(root, &[b"pair"], b"b", &0u32.to_be_bytes(), false)
    })
    .unwrap();

    let writer = {
        let db = Arc::clone(&db);
        thread::spawn(move || {
            for n in 1..=200u32 {
                db.update(|root| {
                    resolver::put(root, &[b"pair"], b"a", &n.to_be_bytes(), true)?;
                    resolver::put(root, &[b"pair"], b"b", &n.to_be_bytes(), true)
                })
                .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for _ in 0..200 {
                    db.view(|root| {
                        let a = resolver::get(root, &[b"pair"], b"a");
                        let b = resolver::get(root, &[b"pair"], b"b");
                        assert_eq!(a, b);
                        Ok(())
                    })
                    .unwrap();
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(
        db.get(&[b"pair"], b"a"),
        Some(200u32.to_be_bytes().to_vec())
    );
}

#[test]
fn failed_updates_do_not_bump_version() {
    let db = db();
    db.put(&[b"a"], b"k", b"v", false).unwrap();

    for _ in 0..5 {
        assert!(db.put(&[b"a"], b"k", b"v", false).is_err());
    }
    assert_eq!(db.version(), 1);
}
