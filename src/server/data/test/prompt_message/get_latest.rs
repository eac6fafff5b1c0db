use super::*;

/// Tests the latest message lookup on an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromptMessageRepository::new(db);

    assert!(repo.get_latest().await?.is_none());

    Ok(())
}

/// Tests that the latest message is the one with the greatest id.
///
/// Expected: Ok(Some) with the last inserted message
#[tokio::test]
async fn returns_most_recently_inserted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let history = factory::helpers::create_message_history(db, 3).await?;

    let repo = PromptMessageRepository::new(db);
    let latest = repo.get_latest().await?.expect("latest message");

    assert_eq!(latest.id, history[2].id);
    assert_eq!(latest.content, history[2].content);

    Ok(())
}
