use super::*;

/// Tests reactivating an older message.
///
/// The old id disappears and the same content comes back under a new id that
/// is now the most recent.
///
/// Expected: Ok(Reactivated)
#[tokio::test]
async fn reactivates_older_message_under_new_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let history = factory::helpers::create_message_history(db, 3).await?;
    let old = &history[0];

    let outcome = PromptMessageService::new(db).reuse(old.id).await?;

    let ReuseOutcome::Reactivated {
        previous_id,
        message,
    } = outcome
    else {
        panic!("expected message to be reactivated");
    };
    assert_eq!(previous_id, old.id);
    assert_eq!(message.content, old.content);
    assert!(message.id > history[2].id);

    let ids = stored_ids(db).await?;
    assert!(!ids.contains(&old.id));
    assert_eq!(ids.last(), Some(&message.id));
    assert_eq!(ids.len(), 3);

    Ok(())
}

/// Tests reactivating the message that is already active.
///
/// Expected: Ok(AlreadyActive) with history and id unchanged
#[tokio::test]
async fn ignores_already_active_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let history = factory::helpers::create_message_history(db, 3).await?;
    let before = stored_ids(db).await?;

    let outcome = PromptMessageService::new(db).reuse(history[2].id).await?;

    assert_eq!(outcome, ReuseOutcome::AlreadyActive);
    assert_eq!(stored_ids(db).await?, before);

    Ok(())
}

/// Tests reactivating an id that does not exist.
///
/// Expected: Ok(NotFound) with history unchanged
#[tokio::test]
async fn ignores_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let history = factory::helpers::create_message_history(db, 2).await?;
    let before = stored_ids(db).await?;

    let outcome = PromptMessageService::new(db)
        .reuse(history[1].id + 50)
        .await?;

    assert_eq!(outcome, ReuseOutcome::NotFound);
    assert_eq!(stored_ids(db).await?, before);

    Ok(())
}

/// Tests that reactivation in a full history evicts nothing.
///
/// Expected: Ok with the history size unchanged
#[tokio::test]
async fn keeps_history_size_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let history = factory::helpers::create_message_history(db, MESSAGES_THRESHOLD).await?;

    PromptMessageService::new(db).reuse(history[0].id).await?;

    assert_eq!(stored_ids(db).await?.len(), MESSAGES_THRESHOLD);

    Ok(())
}
