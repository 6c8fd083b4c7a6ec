use super::*;

/// Tests submitting a suggestion and voting it down then up.
///
/// Expected: empty tally on submit, down={actor}, then up={actor} and down={}
#[tokio::test]
async fn opposite_vote_supersedes_scenario() -> Result<(), AppError> {
    const MESSAGE: u64 = 700;
    const AUTHOR: u64 = 1;
    const ACTOR: u64 = 2;

    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let service = SuggestionService::new(&store);

    let record = service
        .submit(MESSAGE, AUTHOR, "add night mode".to_string())
        .await?;
    assert!(record.up.is_empty());
    assert!(record.down.is_empty());
    assert_eq!(record.text.as_deref(), Some("add night mode"));

    let (record, _) = service.vote(MESSAGE, ACTOR, VoteDirection::Down).await?;
    assert!(record.up.is_empty());
    assert_eq!(record.down, vec![ACTOR]);

    let (record, toggle) = service.vote(MESSAGE, ACTOR, VoteDirection::Up).await?;
    assert_eq!(toggle, VoteToggle::Cast);
    assert_eq!(record.up, vec![ACTOR]);
    assert!(record.down.is_empty());

    Ok(())
}
