use super::*;

/// Tests loading an existing points document.
///
/// Verifies that every entry is read with its integer value.
///
/// Expected: Ok with stored valor matching the document
#[tokio::test]
async fn loads_existing_document() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_points(serde_json::json!({ "1": 10, "2": 0, "3": 250 }))
        .build()?;

    let store = PointStore::load(&test.points_path).await;

    assert_eq!(store.get(UserId::new(1)).await, 10);
    assert_eq!(store.get(UserId::new(2)).await, 0);
    assert_eq!(store.get(UserId::new(3)).await, 250);
    assert_eq!(store.snapshot().await.len(), 3);

    Ok(())
}

/// Tests loading when no points document exists.
///
/// Expected: Ok with an empty store
#[tokio::test]
async fn starts_empty_when_document_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let store = PointStore::load(&test.points_path).await;

    assert!(store.snapshot().await.is_empty());

    Ok(())
}

/// Tests loading a document that is not valid JSON.
///
/// Expected: Ok with an empty store rather than a crash
#[tokio::test]
async fn starts_empty_when_document_malformed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_raw_points("{ \"1\": 10,").build()?;

    let store = PointStore::load(&test.points_path).await;

    assert!(store.snapshot().await.is_empty());

    Ok(())
}

/// Tests loading a document whose values are not non-negative integers.
///
/// Expected: Ok with an empty store
#[tokio::test]
async fn starts_empty_when_document_has_negative_valor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_points(serde_json::json!({ "1": 10, "2": -3 }))
        .build()?;

    let store = PointStore::load(&test.points_path).await;

    assert!(store.snapshot().await.is_empty());

    Ok(())
}

/// Tests that the read error distinguishes a missing file from a malformed one.
///
/// Expected: Err with `is_missing()` only for the absent file
#[tokio::test]
async fn read_document_reports_missing_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let missing = PointStore::read_document(&test.points_path).await;
    assert!(missing.is_err_and(|e| e.is_missing()));

    let test = TestBuilder::new().with_raw_points("not json").build()?;
    let malformed = PointStore::read_document(&test.points_path).await;
    assert!(malformed.is_err_and(|e| !e.is_missing()));

    Ok(())
}

/// Tests that document order is kept for large documents.
///
/// Expected: Ok with entries in fixture order
#[tokio::test]
async fn keeps_document_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_points(fixture::points_document(30))
        .build()?;

    let ledger = PointStore::load(&test.points_path).await.snapshot().await;

    let expected: Vec<String> = (0..30)
        .map(|i| (fixture::FIRST_MEMBER_ID + i).to_string())
        .collect();
    let keys: Vec<String> = ledger.entries().iter().map(|e| e.member_id.clone()).collect();
    assert_eq!(keys, expected);

    Ok(())
}
