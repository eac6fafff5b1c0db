//! Plugin option factory for creating test option entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plugin options.
pub struct PluginOptionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    value: String,
}

impl<'a> PluginOptionFactory<'a> {
    /// Creates a new PluginOptionFactory with an empty value.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `name` - Option key
    ///
    /// # Returns
    /// - `PluginOptionFactory` - New factory instance
    pub fn new(db: &'a DatabaseConnection, name: impl Into<String>) -> Self {
        Self {
            db,
            name: name.into(),
            value: String::new(),
        }
    }

    /// Sets the option value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Builds and inserts the plugin option entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::plugin_option::Model)` - Created plugin option entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::plugin_option::Model, DbErr> {
        entity::plugin_option::ActiveModel {
            name: ActiveValue::Set(self.name),
            value: ActiveValue::Set(self.value),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plugin option with the given name and value.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Option key
/// - `value` - Option value
///
/// # Returns
/// - `Ok(entity::plugin_option::Model)` - Created plugin option entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_plugin_option(
    db: &DatabaseConnection,
    name: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::plugin_option::Model, DbErr> {
    PluginOptionFactory::new(db, name).value(value).build().await
}
