//! Recruitment application factory for creating test application entities.
//!
//! This module provides factory methods for creating recruitment application entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recruitment applications with customizable fields.
///
/// Provides a builder pattern for creating application entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::recruitment_application::ApplicationFactory;
///
/// let application = ApplicationFactory::new(&db)
///     .discord_user_id("123456789")
///     .ign("TestIgn")
///     .status("pending")
///     .build()
///     .await?;
/// ```
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    discord_user_id: String,
    discord_username: String,
    surname: Option<String>,
    ign: String,
    role: Option<String>,
    rank: Option<String>,
    tracker_link: Option<String>,
    status: String,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - discord_user_id: auto-incremented numeric string
    /// - discord_username: `"applicant{id}"`
    /// - ign: `"Ign {id}"`
    /// - status: `"pending"`
    /// - surname/role/rank/tracker_link: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ApplicationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_user_id: id.to_string(),
            discord_username: format!("applicant{}", id),
            surname: None,
            ign: format!("Ign {}", id),
            role: None,
            rank: None,
            tracker_link: None,
            status: "pending".to_string(),
        }
    }

    /// Sets the Discord user ID for the application.
    pub fn discord_user_id(mut self, discord_user_id: &str) -> Self {
        self.discord_user_id = discord_user_id.to_string();
        self
    }

    /// Sets the Discord username for the application.
    pub fn discord_username(mut self, discord_username: &str) -> Self {
        self.discord_username = discord_username.to_string();
        self
    }

    /// Sets the applicant surname.
    pub fn surname(mut self, surname: &str) -> Self {
        self.surname = Some(surname.to_string());
        self
    }

    /// Sets the in-game name.
    pub fn ign(mut self, ign: &str) -> Self {
        self.ign = ign.to_string();
        self
    }

    /// Sets the preferred role.
    pub fn role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// Sets the competitive rank.
    pub fn rank(mut self, rank: &str) -> Self {
        self.rank = Some(rank.to_string());
        self
    }

    /// Sets the tracker profile link.
    pub fn tracker_link(mut self, tracker_link: &str) -> Self {
        self.tracker_link = Some(tracker_link.to_string());
        self
    }

    /// Sets the review status.
    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Inserts the application into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created application row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::recruitment_application::Model, DbErr> {
        entity::recruitment_application::ActiveModel {
            discord_user_id: ActiveValue::Set(self.discord_user_id),
            discord_username: ActiveValue::Set(self.discord_username),
            surname: ActiveValue::Set(self.surname),
            ign: ActiveValue::Set(self.ign),
            role: ActiveValue::Set(self.role),
            rank: ActiveValue::Set(self.rank),
            tracker_link: ActiveValue::Set(self.tracker_link),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a recruitment application with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created application row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_application(
    db: &DatabaseConnection,
) -> Result<entity::recruitment_application::Model, DbErr> {
    ApplicationFactory::new(db).build().await
}
