//! Bot settings repository for database operations.
//!
//! Settings are key-value pairs maintained by admins outside the bot process.
//! The bot only reads them, e.g. to decide whether recruitment is open.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Settings key gating the recruitment questionnaire.
pub const RECRUITMENT_ACTIVE_KEY: &str = "recruitment_active";

/// Repository providing read access to bot settings.
pub struct BotSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotSettingRepository<'a> {
    /// Creates a new BotSettingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BotSettingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a setting value by key.
    ///
    /// # Arguments
    /// - `key` - Settings key, e.g. `recruitment_active`
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The stored value
    /// - `Ok(None)` - No setting stored under that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::BotSetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Checks whether a boolean-ish setting is switched on.
    ///
    /// Only the literal string `"true"` counts as enabled; a missing key
    /// reads as disabled.
    ///
    /// # Arguments
    /// - `key` - Settings key to check
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the setting is enabled
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_enabled(&self, key: &str) -> Result<bool, DbErr> {
        Ok(self.get(key).await?.as_deref() == Some("true"))
    }
}
