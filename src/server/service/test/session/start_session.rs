use super::*;

const PING_ROLES: [u64; 2] = [500, 501];

/// Tests the full vote lifecycle from opening to session start.
///
/// Host A opens a vote, U1 votes and un-votes, U2 votes, then the session is
/// started.
///
/// Expected: announcement lists exactly U2 and the stored vote becomes null
#[tokio::test]
async fn vote_to_session_scenario() -> Result<(), AppError> {
    const HOST: u64 = 1;
    const U1: u64 = 2;
    const U2: u64 = 3;

    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let vote = service.open_vote(HOST).await?;
    service.attach_message(&vote.id, 99).await?;

    let (state, toggle) = service.toggle_vote(&vote.id, U1).await?;
    assert_eq!(toggle, VoteToggle::Cast);
    assert_eq!(state.voters, vec![U1]);

    let (state, toggle) = service.toggle_vote(&vote.id, U1).await?;
    assert_eq!(toggle, VoteToggle::Retracted);
    assert!(state.voters.is_empty());

    let (state, _) = service.toggle_vote(&vote.id, U2).await?;
    assert_eq!(state.voters, vec![U2]);

    let voters = service.start_session(announced).await?;
    assert_eq!(voters, vec![U2]);
    assert_eq!(
        session_start_content(&PING_ROLES, &voters),
        "<@&500> <@&501>\n\n**Voters:** <@3>"
    );

    assert!(store.load().await.session_vote.is_none());
    assert!(test.read_document().unwrap()["sessionVote"].is_null());

    Ok(())
}

/// Tests starting a session when no vote exists.
///
/// Expected: Ok with no voters and an announcement without a voter list
#[tokio::test]
async fn starts_without_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;

    let voters = SessionService::new(&store).start_session(announced).await?;

    assert!(voters.is_empty());
    assert_eq!(session_start_content(&PING_ROLES, &voters), "<@&500> <@&501>");

    Ok(())
}

/// Tests that buttons of a consumed vote are rejected afterwards.
///
/// Expected: Err(StaleVote) after the session started
#[tokio::test]
async fn consumed_vote_is_stale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    service.start_session(announced).await?;

    let result = service
        .toggle_vote(&OpaqueId::parse(fixture::session_vote::DEFAULT_ID).unwrap(), 5)
        .await;
    assert!(matches!(result, Err(AppError::VoteErr(VoteError::StaleVote))));

    Ok(())
}

/// Tests that a failed announcement keeps the vote and its voters.
///
/// The vote is consumed only after the announcement is posted, so the host can retry
/// and ping the same voters.
///
/// Expected: Err from the announcement, vote and voters unchanged, then a retry
/// announces the same voters and consumes the vote
#[tokio::test]
async fn failed_announcement_keeps_vote() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::builder().voters(&[7, 8]).build())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SessionService::new(&store);

    let result = service
        .start_session(|_| async { Err::<(), _>(AppError::InternalError("post failed".to_string())) })
        .await;
    assert!(matches!(result, Err(AppError::InternalError(_))));

    let kept = store.load().await.session_vote.unwrap();
    assert_eq!(kept.id.as_str(), fixture::session_vote::DEFAULT_ID);
    assert_eq!(kept.voters, vec![7, 8]);

    let voters = service.start_session(announced).await?;
    assert_eq!(voters, vec![7, 8]);
    assert!(store.load().await.session_vote.is_none());

    Ok(())
}
