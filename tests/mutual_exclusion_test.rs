use keymutex::LockRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

#[test]
fn test_concurrent_acquire_same_key_is_exclusive() {
    let registry = Arc::new(LockRegistry::new());
    let in_section = Arc::new(AtomicUsize::new(0));
    let overlaps = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = registry.clone();
        let in_section = in_section.clone();
        let overlaps = overlaps.clone();

        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                registry.acquire("shared");

                if in_section.fetch_add(1, Ordering::SeqCst) != 0 {
                    overlaps.fetch_add(1, Ordering::SeqCst);
                }
                // Widen the window so an overlap would actually be observed
                thread::yield_now();
                in_section.fetch_sub(1, Ordering::SeqCst);

                registry.release("shared").unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        overlaps.load(Ordering::SeqCst),
        0,
        "two callers were inside the critical section at once"
    );
}

#[test]
fn test_blocked_acquire_returns_after_release() {
    let registry = Arc::new(LockRegistry::new());

    // T1: acquires immediately on an empty registry
    registry.acquire("a");

    // T2: must block until T1 releases
    let (tx, rx) = mpsc::channel();
    let registry_t2 = registry.clone();
    let waiter = thread::spawn(move || {
        registry_t2.acquire("a");
        tx.send(()).unwrap();
        registry_t2.release("a").unwrap();
    });

    // T2 must not get inside while T1 holds the lock
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

    registry.release("a").unwrap();
    rx.recv_timeout(Duration::from_secs(5))
        .expect("waiter never unblocked after release");
    waiter.join().unwrap();
}
