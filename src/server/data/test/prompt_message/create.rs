use super::*;

/// Tests creating a prompt message.
///
/// Verifies that the repository stores the content and assigns an id and
/// creation timestamp.
///
/// Expected: Ok with message persisted
#[tokio::test]
async fn creates_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromptMessageRepository::new(db);
    let message = repo.create("Leaving already?".to_string()).await?;

    assert_eq!(message.content, "Leaving already?");

    let stored = entity::prelude::PromptMessage::find_by_id(message.id)
        .one(db)
        .await?
        .expect("message should be stored");
    assert_eq!(stored.content, "Leaving already?");
    assert_eq!(stored.created_at, message.created_at);

    Ok(())
}

/// Tests that new messages always receive a greater id.
///
/// Verifies monotonic id assignment, which the active message lookup and
/// eviction depend on.
///
/// Expected: Ok with ascending ids
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromptMessageRepository::new(db);
    let first = repo.create("first".to_string()).await?;
    let second = repo.create("second".to_string()).await?;

    assert!(second.id > first.id);

    Ok(())
}

/// Tests that identical content may be stored twice.
///
/// Duplicate detection is a service concern; the table has no uniqueness
/// constraint on content.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn allows_duplicate_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromptMessageRepository::new(db);
    repo.create("same".to_string()).await?;
    repo.create("same".to_string()).await?;

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
