use super::*;

/// Tests loading the history from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromptMessageRepository::new(db);
    let messages = repo.get_all().await?;

    assert!(messages.is_empty());

    Ok(())
}

/// Tests that the history is ordered oldest first.
///
/// Verifies the messages come back in ascending id order regardless of
/// their creation timestamps.
///
/// Expected: Ok with messages ordered by id
#[tokio::test]
async fn orders_by_id_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let history = factory::helpers::create_message_history(db, 4).await?;

    // Newer row with an older timestamp must still sort last
    let backdated = factory::prompt_message::PromptMessageFactory::new(db)
        .created_at(chrono::Utc::now() - chrono::Duration::days(30))
        .build()
        .await?;

    let repo = PromptMessageRepository::new(db);
    let messages = repo.get_all().await?;

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    let mut expected: Vec<i32> = history.iter().map(|m| m.id).collect();
    expected.push(backdated.id);
    assert_eq!(ids, expected);

    Ok(())
}
