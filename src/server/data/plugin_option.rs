//! Plugin option data repository
//!
//! Key/value storage for plugin-wide options such as the confirmation style.

use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository providing get/set access to plugin options.
pub struct PluginOptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PluginOptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the value stored under `name`
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The stored value
    /// - `Ok(None)` - The option has never been written
    /// - `Err(DbErr)` - Database error
    pub async fn get(&self, name: &str) -> Result<Option<String>, DbErr> {
        let option = entity::prelude::PluginOption::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(option.map(|option| option.value))
    }

    /// Writes `value` under `name`, replacing any existing value
    ///
    /// # Returns
    /// - `Ok(())` - The option was stored
    /// - `Err(DbErr)` - Database error
    pub async fn set(&self, name: &str, value: &str) -> Result<(), DbErr> {
        let option = entity::plugin_option::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };

        entity::prelude::PluginOption::insert(option)
            .on_conflict(
                OnConflict::column(entity::plugin_option::Column::Name)
                    .update_column(entity::plugin_option::Column::Value)
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
