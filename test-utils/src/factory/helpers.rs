//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` prompt messages with distinct content.
///
/// Messages are inserted one after another so their ids ascend in the order of the
/// returned vector; the last element is the active message.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of messages to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created messages, oldest first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_message_history(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::prompt_message::Model>, DbErr> {
    let mut history = Vec::with_capacity(count);
    for _ in 0..count {
        history.push(crate::factory::prompt_message::create_prompt_message(db).await?);
    }

    Ok(history)
}
