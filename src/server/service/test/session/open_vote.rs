use super::*;

/// Tests opening a vote in an empty store.
///
/// Expected: Ok with an open vote, no voters and the host's frozen description
#[tokio::test]
async fn opens_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let vote = service.open_vote(10).await?;

    assert_eq!(vote.host_id, 10);
    assert!(!vote.started);
    assert!(vote.voters.is_empty());
    assert!(vote.message_id.is_none());
    assert!(vote.description.contains("<@10>"));

    Ok(())
}

/// Tests the single active vote invariant.
///
/// A second vote is rejected while the first is unconsumed and accepted once the
/// session has been started.
///
/// Expected: Err(VoteInProgress), then Ok after start_session
#[tokio::test]
async fn single_active_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let first = service.open_vote(10).await?;

    let second = service.open_vote(11).await;
    assert!(matches!(
        second,
        Err(AppError::VoteErr(VoteError::VoteInProgress))
    ));

    service.start_session(announced).await?;

    let third = service.open_vote(11).await?;
    assert_ne!(third.id, first.id);

    Ok(())
}

/// Tests the two-phase creation of a vote and its message.
///
/// Expected: message id recorded on the vote
#[tokio::test]
async fn attaches_message_after_posting() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let vote = service.open_vote(10).await?;
    service.attach_message(&vote.id, 4242).await?;

    assert_eq!(store.load().await.session_vote.unwrap().message_id, Some(4242));

    Ok(())
}

/// Tests rolling back a vote whose message could not be posted.
///
/// Expected: a new vote can be opened right away
#[tokio::test]
async fn discarded_vote_does_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let vote = service.open_vote(10).await?;
    service.discard_vote(&vote.id).await?;

    assert!(service.open_vote(10).await.is_ok());

    Ok(())
}

/// Tests attaching the message of a vote the session already consumed.
///
/// The message is posted, so the host's command still succeeds.
///
/// Expected: Ok(()) and no vote resurrected in the store
#[tokio::test]
async fn attach_after_consumed_vote_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let vote = service.open_vote(10).await?;
    service.start_session(announced).await?;

    service.attach_message(&vote.id, 4242).await?;

    assert!(store.load().await.session_vote.is_none());

    Ok(())
}
