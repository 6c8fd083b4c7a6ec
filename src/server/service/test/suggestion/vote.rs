use super::*;

/// Tests voting on a suggestion the store has no record of.
///
/// Expected: zero-tally record created with the vote applied
#[tokio::test]
async fn unknown_suggestion_is_initialised() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;

    let (record, toggle) = SuggestionService::new(&store)
        .vote(12345, 9, VoteDirection::Down)
        .await?;

    assert_eq!(toggle, VoteToggle::Cast);
    assert!(record.up.is_empty());
    assert_eq!(record.down, vec![9]);
    assert!(store.load().await.suggestion(12345).is_some());

    Ok(())
}

/// Tests mutual exclusion across a sequence of votes from several actors.
///
/// Expected: after every action no actor is in both sets
#[tokio::test]
async fn actor_in_at_most_one_set() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SuggestionService::new(&store);

    let actions = [
        (1, VoteDirection::Up),
        (1, VoteDirection::Down),
        (2, VoteDirection::Down),
        (2, VoteDirection::Down),
        (3, VoteDirection::Up),
        (2, VoteDirection::Up),
        (1, VoteDirection::Up),
    ];

    for (actor, direction) in actions {
        let (record, _) = service.vote(1, actor, direction).await?;
        for id in &record.up {
            assert!(!record.down.contains(id), "actor {id} in both sets");
        }
    }

    let record = store.load().await.suggestion(1).cloned().unwrap();
    assert_eq!(record.up, vec![3, 2, 1]);
    assert!(record.down.is_empty());

    Ok(())
}

/// Tests the acknowledgement shown for each outcome.
///
/// Expected: cast and retract notices per direction
#[test]
fn acknowledges_outcome() {
    assert_eq!(
        vote_ack(VoteDirection::Up, VoteToggle::Cast),
        "You upvoted this suggestion."
    );
    assert_eq!(
        vote_ack(VoteDirection::Down, VoteToggle::Retracted),
        "You removed your downvote."
    );
}
