use super::*;

/// Tests writing a new option.
///
/// Expected: Ok and the value can be read back
#[tokio::test]
async fn inserts_new_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PluginOptionRepository::new(db);
    repo.set("confirmation_style", "modal").await?;

    assert_eq!(
        repo.get("confirmation_style").await?.as_deref(),
        Some("modal")
    );

    Ok(())
}

/// Tests overwriting an existing option.
///
/// Expected: Ok with the new value replacing the old one
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_plugin_option(db, "confirmation_style", "modal").await?;

    let repo = PluginOptionRepository::new(db);
    repo.set("confirmation_style", "confirmation").await?;

    assert_eq!(
        repo.get("confirmation_style").await?.as_deref(),
        Some("confirmation")
    );
    let rows = <entity::prelude::PluginOption as sea_orm::EntityTrait>::find()
        .all(db)
        .await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
