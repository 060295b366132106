//! Bot setting factory for creating test settings entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a bot setting with the given key and value.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Setting key, e.g. `"recruitment_active"`
/// - `value` - Setting value, e.g. `"true"`
///
/// # Returns
/// - `Ok(Model)` - The created setting row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::bot_setting::Model, DbErr> {
    entity::bot_setting::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
    }
    .insert(db)
    .await
}
