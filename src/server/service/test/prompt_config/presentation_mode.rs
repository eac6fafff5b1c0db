use super::*;

/// Tests the presentation mode before it was ever set.
///
/// The migrations seed `confirmation`, but the tables here are created bare, so the
/// option row is missing entirely.
///
/// Expected: Ok(Confirmation)
#[tokio::test]
async fn defaults_to_confirmation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    let mode = PromptConfigService::new(db, &settings)
        .presentation_mode()
        .await?;

    assert_eq!(mode, PresentationMode::Confirmation);

    Ok(())
}

/// Tests toggling the modal flag on and off.
///
/// Expected: Ok with the mode persisted after each toggle
#[tokio::test]
async fn persists_modal_toggle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();
    let service = PromptConfigService::new(db, &settings);

    assert_eq!(service.set_presentation_mode(true).await?, PresentationMode::Modal);
    assert_eq!(service.presentation_mode().await?, PresentationMode::Modal);

    assert_eq!(
        service.set_presentation_mode(false).await?,
        PresentationMode::Confirmation
    );
    assert_eq!(service.presentation_mode().await?, PresentationMode::Confirmation);

    Ok(())
}

/// Tests that an unrecognized stored value falls back to the confirmation dialog.
///
/// Expected: Ok(Confirmation)
#[tokio::test]
async fn falls_back_on_unknown_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = PromptSettings::default();

    factory::create_plugin_option(db, CONFIRMATION_STYLE_OPTION, "popup").await?;

    let mode = PromptConfigService::new(db, &settings)
        .presentation_mode()
        .await?;

    assert_eq!(mode, PresentationMode::Confirmation);

    Ok(())
}
