use crate::server::{
    error::AppError,
    model::prompt_message::{ReuseOutcome, SubmitOutcome},
    service::prompt_message::{MessageStore, PromptMessageService, MESSAGES_THRESHOLD},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod reuse;
mod store;

/// Ids of all stored messages, ascending.
async fn stored_ids(db: &sea_orm::DatabaseConnection) -> Result<Vec<i32>, DbErr> {
    let mut ids: Vec<i32> = entity::prelude::PromptMessage::find()
        .all(db)
        .await?
        .into_iter()
        .map(|message| message.id)
        .collect();
    ids.sort_unstable();
    Ok(ids)
}
