use super::*;

/// Tests discarding the vote a failed post belonged to.
///
/// Expected: Ok(true) and the store holds no vote
#[tokio::test]
async fn discards_matching_vote() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let discarded = repo
        .discard(&vote_id(fixture::session_vote::DEFAULT_ID))
        .await?;

    assert!(discarded);
    assert!(repo.get().await.is_none());

    Ok(())
}

/// Tests that discarding never removes a newer vote.
///
/// Expected: Ok(false) and the current vote kept
#[tokio::test]
async fn discard_keeps_other_vote() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let discarded = repo.discard(&vote_id("1")).await?;

    assert!(!discarded);
    assert!(repo.get().await.is_some());

    Ok(())
}
