//! Process-Wide Directory Tests
//!
//! The registry hands every caller the same directory. Tests here share
//! that instance, so each one holds the lock for its whole body (or
//! tracks its own ids), asserts deltas rather than absolutes, and
//! removes what it added.

use crate::common::*;
use rolodex::registry;
use std::thread;

#[test]
fn test_global_add_find_delete_delta() {
    init_tracing();
    let mut directory = registry::global().lock();
    let before = directory.len();

    let id = directory
        .add_contact(FIRST, LAST, PHONE, ADDRESS)
        .expect("add should succeed");
    assert_eq!(directory.len(), before + 1);

    let contact = directory.find_contact(id.as_str()).expect("find should succeed");
    assert_eq!(contact.first_name(), FIRST);

    directory.delete_contact(id.as_str()).expect("delete should succeed");
    assert_eq!(directory.len(), before);
}

#[test]
fn test_global_is_shared_across_lock_scopes() {
    init_tracing();

    let id = {
        let mut directory = registry::global().lock();
        directory
            .add_contact("Barney", "Rubble", "4445556666", "125 Test Lane")
            .expect("add should succeed")
    };

    // A separate lock scope sees the same contact
    {
        let directory = registry::global().lock();
        let contact = directory.find_contact(id.as_str()).expect("still present");
        assert_eq!(contact.first_name(), "Barney");
    }

    let mut directory = registry::global().lock();
    directory.delete_contact(id.as_str()).expect("cleanup");
}

#[test]
fn test_global_visible_from_other_threads() {
    init_tracing();

    let id = {
        let mut directory = registry::global().lock();
        directory
            .add_contact("Wilma", "Smith", "1112223333", "123 Test Lane")
            .expect("add should succeed")
    };

    let seen = {
        let id = id.clone();
        thread::spawn(move || {
            let directory = registry::global().lock();
            directory
                .find_contact(id.as_str())
                .map(|c| c.first_name().to_string())
        })
        .join()
        .expect("thread should not panic")
    };
    assert_eq!(seen.expect("contact visible in other thread"), "Wilma");

    let mut directory = registry::global().lock();
    directory.delete_contact(id.as_str()).expect("cleanup");
}

#[test]
fn test_global_concurrent_adds_all_land() {
    init_tracing();
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            thread::spawn(move || {
                let mut ids = Vec::with_capacity(per_thread);
                for _ in 0..per_thread {
                    let mut directory = registry::global().lock();
                    let id = directory
                        .add_contact(FIRST, LAST, PHONE, ADDRESS)
                        .expect("concurrent add should succeed");
                    ids.push(id);
                }
                ids
            })
        })
        .collect();

    let all_ids: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("thread should not panic"))
        .collect();
    assert_eq!(all_ids.len(), threads * per_thread);

    let mut directory = registry::global().lock();
    for id in &all_ids {
        assert!(directory.find_contact(id.as_str()).is_ok(), "id {} should have landed", id);
    }
    for id in &all_ids {
        directory.delete_contact(id.as_str()).expect("cleanup");
    }
}
