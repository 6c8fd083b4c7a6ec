use super::*;

/// Tests storing a freshly submitted suggestion.
///
/// Expected: Ok with the record keyed by message id and no votes
#[tokio::test]
async fn creates_record() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SuggestionRepository::new(&store);

    repo.create(900, SuggestionRecord::new(4, "More cars".to_string()))
        .await?;

    let record = store.load().await.suggestion(900).cloned().unwrap();
    assert_eq!(record.author, Some(4));
    assert_eq!(record.text.as_deref(), Some("More cars"));
    assert_eq!(record.upvotes(), 0);
    assert_eq!(test.read_document().unwrap()["suggestions"]["900"]["author"], "4");

    Ok(())
}

/// Tests that other suggestions are kept when a new one is created.
///
/// Expected: both records present
#[tokio::test]
async fn keeps_other_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_suggestion(1, fixture::suggestion::builder().up(&[5]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SuggestionRepository::new(&store);

    repo.create(2, SuggestionRecord::new(4, "Second".to_string()))
        .await?;

    assert_eq!(store.load().await.suggestion(1).cloned().unwrap().up, vec![5]);
    assert!(store.load().await.suggestion(2).cloned().is_some());

    Ok(())
}
