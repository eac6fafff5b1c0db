use super::*;

/// Tests the active message of an empty history.
///
/// Expected: Ok with empty string
#[tokio::test]
async fn returns_empty_without_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    let message = PromptConfigService::new(db, &settings)
        .active_message(false)
        .await?;

    assert!(message.is_empty());

    Ok(())
}

/// Tests that the active message is the most recently submitted one, decoded.
///
/// Expected: Ok with the decoded markup of the latest message
#[tokio::test]
async fn returns_latest_message_decoded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    let messages = PromptMessageService::new(db);
    messages.submit("Old message").await?;
    messages
        .submit("You are leaving.<br>[redirect]Go on[/redirect]")
        .await?;

    let message = PromptConfigService::new(db, &settings)
        .active_message(false)
        .await?;

    assert_eq!(message, "You are leaving.<br>[redirect]Go on[/redirect]");

    Ok(())
}

/// Tests the stripped form of the active message.
///
/// Markup and placeholder tokens are removed and sentences glued together by a
/// removed tag get their space back.
///
/// Expected: Ok with plain text free of `<`, `>` and `[`
#[tokio::test]
async fn strips_markup_and_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    PromptMessageService::new(db)
        .submit("<strong>Careful.</strong>You leave us.<br>[cancel]Stay[/cancel] [redirect]Go[/redirect]")
        .await?;

    let message = PromptConfigService::new(db, &settings)
        .active_message(true)
        .await?;

    assert!(!message.contains(['<', '>', '[']));
    assert_eq!(message, "Careful. You leave us. Stay Go");

    Ok(())
}
