use super::*;

/// Tests loading a corrupt document.
///
/// Verifies that unparseable content degrades to the empty document instead of
/// failing the interaction.
///
/// Expected: default document
#[tokio::test]
async fn corrupt_document_loads_as_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_document("{ not json")
        .build()
        .await
        .unwrap();

    let store = JsonStore::open(test.data_dir()).await?;

    assert_eq!(store.load().await, StoreDocument::default());

    Ok(())
}

/// Tests loading after the document was removed from disk.
///
/// Expected: default document
#[tokio::test]
async fn missing_document_loads_as_default() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;

    std::fs::remove_file(store.path()).unwrap();

    assert_eq!(store.load().await, StoreDocument::default());

    Ok(())
}

/// Tests loading a document written with the legacy `host` key and numeric ids.
///
/// Expected: vote and suggestion tallies read back with numeric ids
#[tokio::test]
async fn reads_legacy_layout() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_document(
            r#"{
                "sessionVote": { "id": "42", "host": 7, "started": false, "voters": [8, "9"], "description": "hi" },
                "suggestions": { "100": { "up": ["1"], "down": [] } }
            }"#,
        )
        .build()
        .await
        .unwrap();

    let store = JsonStore::open(test.data_dir()).await?;
    let document = store.load().await;

    let vote = document.session_vote.as_ref().unwrap();
    assert_eq!(vote.host_id, 7);
    assert_eq!(vote.voters, vec![8, 9]);
    assert_eq!(document.suggestion(100).unwrap().up, vec![1]);

    Ok(())
}

/// Tests that a saved document is read back unchanged.
///
/// Expected: loaded document equals the saved one and ids are persisted as strings
#[tokio::test]
async fn save_then_load() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;

    let mut document = StoreDocument::default();
    let mut vote = SessionVote::new(OpaqueId::mint(), 5, "Vote now".to_string());
    vote.voters.push(6);
    document.session_vote = Some(vote);
    document.suggestion_entry(77).up.push(8);

    store.save(&document).await?;

    assert_eq!(store.load().await, document);
    let raw = test.read_document().unwrap();
    assert_eq!(raw["sessionVote"]["hostId"], "5");
    assert_eq!(raw["suggestions"]["77"]["up"][0], "8");

    Ok(())
}
