use super::*;

/// Tests reading an option that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PluginOptionRepository::new(db);

    assert!(repo.get("confirmation_style").await?.is_none());

    Ok(())
}

/// Tests reading a stored option.
///
/// Expected: Ok(Some) with the stored value
#[tokio::test]
async fn returns_stored_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_plugin_option(db, "confirmation_style", "modal").await?;

    let repo = PluginOptionRepository::new(db);

    assert_eq!(
        repo.get("confirmation_style").await?.as_deref(),
        Some("modal")
    );

    Ok(())
}
