use super::*;

/// Tests opening the store in an empty data directory.
///
/// Verifies that a default document is written so that later reads find both
/// top-level keys.
///
/// Expected: Ok with sessions.json containing an empty document
#[tokio::test]
async fn creates_default_document() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();

    let store = JsonStore::open(test.data_dir()).await?;

    assert!(store.path().ends_with(STORE_FILE_NAME));
    assert_eq!(
        test.read_document().unwrap(),
        serde_json::json!({ "sessionVote": null, "suggestions": {} })
    );

    Ok(())
}

/// Tests opening the store in a data directory that does not exist yet.
///
/// Expected: Ok with the directory created
#[tokio::test]
async fn creates_missing_data_dir() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let nested = test.data_dir().join("nested").join("data");

    let store = JsonStore::open(&nested).await?;

    assert!(store.path().exists());

    Ok(())
}

/// Tests that opening never overwrites an existing document.
///
/// Expected: Ok with the seeded vote still present
#[tokio::test]
async fn keeps_existing_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();

    let store = JsonStore::open(test.data_dir()).await?;
    let document = store.load().await;

    let vote = document.session_vote.unwrap();
    assert_eq!(vote.host_id, fixture::session_vote::DEFAULT_HOST_ID);
    assert_eq!(vote.id.as_str(), fixture::session_vote::DEFAULT_ID);

    Ok(())
}
