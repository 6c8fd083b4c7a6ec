use super::*;
use crate::server::error::vote::VoteError;

/// Tests that a failing mutation leaves the document untouched.
///
/// Expected: Err from the mutation and no change on disk
#[tokio::test]
async fn failed_mutation_does_not_save() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_suggestion(1, fixture::suggestion::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;
    let before = test.read_document().unwrap();

    let result: Result<(), AppError> = store
        .update(|document| {
            document.suggestions.clear();
            Err(VoteError::NoActiveVote.into())
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::VoteErr(VoteError::NoActiveVote))
    ));
    assert_eq!(test.read_document().unwrap(), before);

    Ok(())
}

/// Tests that concurrent updates are serialised.
///
/// Spawns many tasks that each append one voter through `update`. With a lost
/// update some voters would be missing.
///
/// Expected: every voter present exactly once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_vote(fixture::session_vote::json())
        .build()
        .await
        .unwrap();
    let store = JsonStore::open(test.data_dir()).await?;

    let mut handles = Vec::new();
    for actor in 1..=32u64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .update(|document| {
                    if let Some(vote) = document.session_vote.as_mut() {
                        vote.toggle_voter(actor);
                    }
                    Ok(())
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    let mut voters = store.load().await.session_vote.unwrap().voters;
    voters.sort_unstable();
    assert_eq!(voters, (1..=32).collect::<Vec<u64>>());

    Ok(())
}

/// Tests that no temporary file is left behind after a write.
///
/// Expected: only sessions.json in the data directory
#[tokio::test]
async fn leaves_no_temp_file() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = JsonStore::open(test.data_dir()).await?;

    store
        .update(|document| {
            document.suggestion_entry(3);
            Ok(())
        })
        .await?;

    let entries: Vec<_> = std::fs::read_dir(test.data_dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(STORE_FILE_NAME)]);

    Ok(())
}
