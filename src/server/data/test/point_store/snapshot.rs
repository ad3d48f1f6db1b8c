use super::*;

/// Tests that a snapshot is unaffected by later mutations.
///
/// Expected: snapshot keeps the old value
#[tokio::test]
async fn snapshot_is_a_copy() {
    let store = PointStore::default();
    store.set(UserId::new(1), 10).await;

    let snapshot = store.snapshot().await;
    store.add(UserId::new(1), 5).await;

    assert_eq!(snapshot.get("1"), 10);
    assert_eq!(store.get(UserId::new(1)).await, 15);
}

/// Tests that serializing the store and loading it back reproduces the mapping.
///
/// Expected: Ok with identical ledger after reload
#[tokio::test]
async fn serialized_snapshot_reloads_identically() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = PointStore::new(ValorLedger::from_iter([
        ("300".to_string(), 4),
        ("100".to_string(), 0),
        ("200".to_string(), 75),
    ]));

    let snapshot = store.snapshot().await;
    std::fs::write(&test.points_path, serde_json::to_string_pretty(&snapshot)?)?;
    let reloaded = PointStore::load(&test.points_path).await.snapshot().await;

    assert_eq!(reloaded, snapshot);

    Ok(())
}
