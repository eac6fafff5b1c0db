use super::*;

/// Tests that the history is cached until the next mutation.
///
/// A row inserted behind the store's back is invisible until the store itself
/// mutates, which drops the cache.
///
/// Expected: Ok with cached length, then refreshed length
#[tokio::test]
async fn caches_history_until_mutation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_message_history(db, 2).await?;

    let mut store = MessageStore::new(db);
    assert_eq!(store.count().await?, 2);

    factory::create_prompt_message(db).await?;
    assert_eq!(store.count().await?, 2);

    store.add("fresh".to_string()).await?;
    assert_eq!(store.count().await?, 4);

    Ok(())
}

/// Tests that the latest message is the last loaded entry.
///
/// Expected: Ok(Some) with the greatest id, Ok(None) when empty
#[tokio::test]
async fn latest_is_greatest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut store = MessageStore::new(db);
    assert!(store.latest().await?.is_none());

    let history = factory::helpers::create_message_history(db, 3).await?;

    let mut store = MessageStore::new(db);
    assert_eq!(store.latest().await?.map(|m| m.id), Some(history[2].id));

    Ok(())
}

/// Tests that nothing is evicted at or below the threshold.
///
/// Expected: Ok(None) and all rows kept
#[tokio::test]
async fn keeps_history_within_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_message_history(db, MESSAGES_THRESHOLD).await?;

    let mut store = MessageStore::new(db);
    assert_eq!(store.evict_oldest_if_over_threshold().await?, None);
    assert_eq!(store.count().await?, MESSAGES_THRESHOLD);

    Ok(())
}

/// Tests eviction once the threshold is exceeded.
///
/// The smallest id is evicted even when its timestamp is the newest, since
/// eviction follows id order.
///
/// Expected: Ok(Some(smallest id))
#[tokio::test]
async fn evicts_smallest_id_over_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::prompt_message::PromptMessageFactory::new(db)
        .created_at(chrono::Utc::now() + chrono::Duration::days(1))
        .build()
        .await?;
    factory::helpers::create_message_history(db, MESSAGES_THRESHOLD).await?;

    let mut store = MessageStore::new(db);
    assert_eq!(store.evict_oldest_if_over_threshold().await?, Some(first.id));
    assert_eq!(store.count().await?, MESSAGES_THRESHOLD);
    assert!(store.find_by_id(first.id).await?.is_none());

    Ok(())
}

/// Tests the duplicate content check against stored content.
///
/// Expected: Ok(true) for stored content, Ok(false) otherwise
#[tokio::test]
async fn detects_stored_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prompt_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::prompt_message::PromptMessageFactory::new(db)
        .content("Bye &amp; thanks")
        .build()
        .await?;

    let mut store = MessageStore::new(db);
    assert!(store.contains_content("Bye &amp; thanks").await?);
    assert!(!store.contains_content("Bye & thanks").await?);

    Ok(())
}
