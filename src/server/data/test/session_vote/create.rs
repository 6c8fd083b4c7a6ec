use super::*;

/// Tests creating a vote in an empty store.
///
/// Expected: Ok with the vote persisted
#[tokio::test]
async fn creates_vote_in_empty_store() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let vote = repo
        .create(SessionVote::new(OpaqueId::mint(), 10, "Vote".to_string()))
        .await?;

    assert_eq!(repo.get().await, Some(vote));

    Ok(())
}

/// Tests that an open vote blocks a second one.
///
/// Expected: Err(VoteInProgress) and the original vote unchanged
#[tokio::test]
async fn rejects_while_vote_open() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::builder().voters(&[1]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let result = repo
        .create(SessionVote::new(OpaqueId::mint(), 10, "Vote".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::VoteErr(VoteError::VoteInProgress))
    ));
    let current = repo.get().await.unwrap();
    assert_eq!(current.id.as_str(), fixture::session_vote::DEFAULT_ID);
    assert_eq!(current.voters, vec![1]);

    Ok(())
}

/// Tests that a started vote no longer blocks a new one.
///
/// Expected: Ok with the new vote replacing the consumed one
#[tokio::test]
async fn replaces_started_vote() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::builder().started().build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let vote = repo
        .create(SessionVote::new(vote_id("99"), 10, "Again".to_string()))
        .await?;

    assert_eq!(repo.get().await.unwrap().id, vote.id);

    Ok(())
}
