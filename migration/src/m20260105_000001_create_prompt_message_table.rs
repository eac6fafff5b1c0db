use sea_orm_migration::{prelude::*, schema::*};

/// Message shown until an administrator saves their own.
///
/// Uses the default `[cancel]` and `[redirect]` placeholder tokens so the modal renders
/// inline actions out of the box.
const DEFAULT_MESSAGE: &str = "The page you are visiting is trying to send you to another site. <br> \
If you do not want to visit that site, you can [cancel]cancel[/cancel] here.<br>\
Choose [redirect]continue[/redirect] to leave this page and follow the link.";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromptMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(PromptMessage::Id))
                    .col(text(PromptMessage::Content).not_null())
                    .col(
                        timestamp(PromptMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Seed the history with the default message
        let seed = Query::insert()
            .into_table(PromptMessage::Table)
            .columns([PromptMessage::Content])
            .values_panic([DEFAULT_MESSAGE.into()])
            .to_owned();

        manager.get_connection().execute(&seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromptMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromptMessage {
    Table,
    Id,
    Content,
    CreatedAt,
}
