use super::*;

/// Tests that toggling twice restores the voter set.
///
/// Membership is restored; a retracted-then-recast voter moves to the end.
///
/// Expected: same voter set after two toggles
#[tokio::test]
async fn double_toggle_is_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::builder().voters(&[1, 2]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);
    let vote_id = OpaqueId::parse(fixture::session_vote::DEFAULT_ID).unwrap();

    for actor in [1, 3] {
        let (_, first) = service.toggle_vote(&vote_id, actor).await?;
        let (vote, second) = service.toggle_vote(&vote_id, actor).await?;

        let mut voters = vote.voters;
        voters.sort_unstable();

        assert_ne!(first, second);
        assert_eq!(voters, vec![1, 2]);
    }

    Ok(())
}

/// Tests that a button from another vote leaves the store unchanged.
///
/// Expected: Err(StaleVote) and an identical document on disk
#[tokio::test]
async fn stale_vote_leaves_store_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::builder().id("A").voters(&[1]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);
    let before = test.read_document().unwrap();

    let result = service
        .toggle_vote(&OpaqueId::parse("B").unwrap(), 2)
        .await;

    assert!(matches!(result, Err(AppError::VoteErr(VoteError::StaleVote))));
    assert_eq!(
        result.unwrap_err().user_message(),
        "This session vote is no longer active."
    );
    assert_eq!(test.read_document().unwrap(), before);

    Ok(())
}
