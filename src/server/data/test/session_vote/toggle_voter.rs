use super::*;

/// Tests that pressing twice casts then retracts.
///
/// Expected: Cast with one voter, then Retracted with none
#[tokio::test]
async fn toggles_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);
    let id = vote_id(fixture::session_vote::DEFAULT_ID);

    let (vote, toggle) = repo.toggle_voter(&id, 42).await?;
    assert_eq!(toggle, VoteToggle::Cast);
    assert_eq!(vote.voters, vec![42]);

    let (vote, toggle) = repo.toggle_voter(&id, 42).await?;
    assert_eq!(toggle, VoteToggle::Retracted);
    assert!(vote.voters.is_empty());

    Ok(())
}

/// Tests that voters keep the order in which they voted.
///
/// Expected: voters [3, 1, 2]
#[tokio::test]
async fn keeps_voting_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);
    let id = vote_id(fixture::session_vote::DEFAULT_ID);

    for actor in [3, 1, 2] {
        repo.toggle_voter(&id, actor).await?;
    }

    assert_eq!(repo.get().await.unwrap().voters, vec![3, 1, 2]);

    Ok(())
}

/// Tests pressing a button from an older vote.
///
/// Expected: Err(StaleVote) and the current vote unchanged
#[tokio::test]
async fn rejects_stale_vote_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::builder().voters(&[1]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let result = repo.toggle_voter(&vote_id("1"), 2).await;

    assert!(matches!(result, Err(AppError::VoteErr(VoteError::StaleVote))));
    assert_eq!(repo.get().await.unwrap().voters, vec![1]);

    Ok(())
}

/// Tests pressing a vote button when no vote exists.
///
/// Expected: Err(StaleVote)
#[tokio::test]
async fn rejects_when_no_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let repo = SessionVoteRepository::new(&store);

    let result = repo.toggle_voter(&vote_id("1"), 2).await;

    assert!(matches!(result, Err(AppError::VoteErr(VoteError::StaleVote))));

    Ok(())
}
