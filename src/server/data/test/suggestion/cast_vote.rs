use super::*;

/// Tests voting on a suggestion the store has never seen.
///
/// Expected: Ok with a record created lazily holding the vote
#[tokio::test]
async fn initialises_unknown_suggestion() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SuggestionRepository::new(&store);

    let (record, toggle) = repo.cast_vote(321, 9, VoteDirection::Up).await?;

    assert_eq!(toggle, VoteToggle::Cast);
    assert_eq!(record.up, vec![9]);
    assert!(record.author.is_none());
    assert_eq!(store.load().await.suggestion(321).cloned(), Some(record));

    Ok(())
}

/// Tests switching direction on an existing suggestion.
///
/// Expected: actor moved from down to up
#[tokio::test]
async fn switches_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_suggestion(1, fixture::suggestion::builder().down(&[9]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SuggestionRepository::new(&store);

    let (record, toggle) = repo.cast_vote(1, 9, VoteDirection::Up).await?;

    assert_eq!(toggle, VoteToggle::Cast);
    assert_eq!(record.up, vec![9]);
    assert!(record.down.is_empty());
    assert_eq!(record.author, Some(fixture::suggestion::DEFAULT_AUTHOR_ID));

    Ok(())
}

/// Tests retracting a vote by pressing the same direction again.
///
/// Expected: Retracted with the downvote removed
#[tokio::test]
async fn retracts_same_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_suggestion(1, fixture::suggestion::builder().down(&[9, 10]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SuggestionRepository::new(&store);

    let (record, toggle) = repo.cast_vote(1, 9, VoteDirection::Down).await?;

    assert_eq!(toggle, VoteToggle::Retracted);
    assert_eq!(record.down, vec![10]);

    Ok(())
}
