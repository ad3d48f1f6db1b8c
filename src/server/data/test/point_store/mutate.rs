use super::*;

#[tokio::test]
async fn get_returns_zero_for_unknown_member() {
    let store = PointStore::default();
    assert_eq!(store.get(UserId::new(5)).await, 0);
}

/// Tests that `set` creates then overwrites an entry.
///
/// Expected: latest value stored, single entry
#[tokio::test]
async fn set_creates_and_overwrites() {
    let store = PointStore::default();

    store.set(UserId::new(5), 12).await;
    store.set(UserId::new(5), 3).await;

    assert_eq!(store.get(UserId::new(5)).await, 3);
    assert_eq!(store.snapshot().await.len(), 1);
}

/// Tests that `add` increments from the current value.
///
/// Expected: total = initial + amount for several initial values
#[tokio::test]
async fn add_increments_valor() {
    for (initial, amount) in [(0, 1), (10, 15), (199, 1), (7, 1000)] {
        let store = PointStore::default();
        store.set(UserId::new(1), initial).await;

        let total = store.add(UserId::new(1), amount).await;

        assert_eq!(total, initial + amount);
        assert_eq!(store.get(UserId::new(1)).await, initial + amount);
    }
}

/// Tests that `subtract` clamps at zero.
///
/// Expected: total = max(0, initial - amount)
#[tokio::test]
async fn subtract_clamps_at_zero() {
    for (initial, amount, expected) in [(10, 3, 7), (10, 10, 0), (10, 11, 0), (0, 5, 0)] {
        let store = PointStore::default();
        store.set(UserId::new(1), initial).await;

        let total = store.subtract(UserId::new(1), amount).await;

        assert_eq!(total, expected);
        assert_eq!(store.get(UserId::new(1)).await, expected);
    }
}

/// Tests that subtracting from an unknown member creates a zero entry.
///
/// Expected: entry exists with valor 0
#[tokio::test]
async fn subtract_creates_entry_for_unknown_member() {
    let store = PointStore::default();

    store.subtract(UserId::new(9), 4).await;

    let ledger = store.snapshot().await;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.get("9"), 0);
}

/// Tests that concurrent additions from many tasks are not lost.
///
/// Expected: total equals the sum of all additions
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_not_lost() {
    let store = PointStore::default();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.add(UserId::new(1), 2).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.get(UserId::new(1)).await, 100);
}
