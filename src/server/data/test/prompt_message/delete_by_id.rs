use super::*;

/// Tests deleting a message by id.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = factory::create_prompt_message(db).await?;

    let repo = PromptMessageRepository::new(db);
    let rows = repo.delete_by_id(message.id).await?;

    assert_eq!(rows, 1);
    let check = entity::prelude::PromptMessage::find_by_id(message.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0) and other rows untouched
#[tokio::test]
async fn reports_zero_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = factory::create_prompt_message(db).await?;

    let repo = PromptMessageRepository::new(db);
    let rows = repo.delete_by_id(message.id + 100).await?;

    assert_eq!(rows, 0);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
