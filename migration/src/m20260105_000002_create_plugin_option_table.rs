use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PluginOption::Table)
                    .if_not_exists()
                    .col(string(PluginOption::Name).primary_key())
                    .col(string(PluginOption::Value).not_null())
                    .to_owned(),
            )
            .await?;

        // Installation default, only written if the option is absent
        let seed = Query::insert()
            .into_table(PluginOption::Table)
            .columns([PluginOption::Name, PluginOption::Value])
            .values_panic(["confirmation_style".into(), "confirmation".into()])
            .on_conflict(OnConflict::column(PluginOption::Name).do_nothing().to_owned())
            .to_owned();

        manager.get_connection().execute(&seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PluginOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PluginOption {
    Table,
    Name,
    Value,
}
