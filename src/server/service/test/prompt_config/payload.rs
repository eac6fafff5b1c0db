use super::*;
use crate::server::{config::PromptLabels, util::placeholder::PlaceholderRule};

/// Tests the client payload built from the active message.
///
/// Placeholders are rewritten into action markup in `content` while
/// `plain_content` carries no markup at all.
///
/// Expected: Ok with rewritten content, plain text and default labels
#[tokio::test]
async fn rewrites_placeholders_in_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    PromptMessageService::new(db)
        .submit("Bye. [redirect]continue[/redirect] or [cancel]stay[/cancel]")
        .await?;

    let payload = PromptConfigService::new(db, &settings).payload().await?;

    assert_eq!(
        payload.message.content,
        "Bye. <a class='modal-redirect modal-redirect-text'>continue</a> or \
         <a class='modal-close modal-close-text'>stay</a>"
    );
    assert_eq!(payload.message.plain_content, "Bye. continue or stay");
    assert_eq!(payload.message.title, settings.labels.title);
    assert_eq!(payload.message.redirect, settings.labels.redirect);
    assert_eq!(payload.presentation_mode, PresentationMode::Confirmation);

    Ok(())
}

/// Tests that configured labels and tokens flow into the payload.
///
/// Expected: Ok with custom labels, custom token rewritten, modal mode
#[tokio::test]
async fn uses_configured_labels_and_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings {
        labels: PromptLabels {
            title: "Hinweis".to_string(),
            ..PromptLabels::default()
        },
        placeholders: vec![PlaceholderRule::new("button.modal-redirect", "[weiter]")],
    };

    PromptMessageService::new(db)
        .submit("[weiter]Ok[/weiter]")
        .await?;
    let service = PromptConfigService::new(db, &settings);
    service.set_presentation_mode(true).await?;

    let payload = service.payload().await?;

    assert_eq!(payload.message.title, "Hinweis");
    assert_eq!(
        payload.message.content,
        "<button class='modal-redirect'>Ok</button>"
    );
    assert_eq!(payload.presentation_mode, PresentationMode::Modal);

    Ok(())
}

/// Tests the settings view handed to the admin endpoints.
///
/// Expected: Ok with history oldest first and the last entry active
#[tokio::test]
async fn settings_view_marks_latest_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    let history = factory::helpers::create_message_history(db, 3).await?;

    let dto = PromptConfigService::new(db, &settings)
        .settings_view()
        .await?
        .into_dto();

    let ids: Vec<i32> = dto.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, history.iter().map(|m| m.id).collect::<Vec<_>>());
    assert_eq!(dto.active_message_id, Some(history[2].id));

    Ok(())
}
