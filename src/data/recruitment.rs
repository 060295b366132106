//! Recruitment application repository for database operations.
//!
//! Handles inserting submitted applications and looking up an applicant's
//! most recent submission, with conversion between entity models and domain
//! models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::recruitment::{Application, ApplicationStatus, NewApplicationParam};

/// Repository providing database operations for recruitment applications.
pub struct RecruitmentApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecruitmentApplicationRepository<'a> {
    /// Creates a new RecruitmentApplicationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RecruitmentApplicationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a freshly submitted application with pending status.
    ///
    /// # Arguments
    /// - `param` - Application parameters collected by the questionnaire
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: NewApplicationParam) -> Result<Application, DbErr> {
        let entity = entity::recruitment_application::ActiveModel {
            discord_user_id: ActiveValue::Set(param.discord_user_id),
            discord_username: ActiveValue::Set(param.discord_username),
            surname: ActiveValue::Set(param.surname),
            ign: ActiveValue::Set(param.ign),
            role: ActiveValue::Set(param.role),
            rank: ActiveValue::Set(param.rank),
            tracker_link: ActiveValue::Set(param.tracker_link),
            status: ActiveValue::Set(ApplicationStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Application::from_entity(entity))
    }

    /// Finds a user's most recent application.
    ///
    /// # Arguments
    /// - `discord_user_id` - Discord user ID of the applicant
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - The newest application for that user
    /// - `Ok(None)` - The user never submitted an application
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_latest_by_user(
        &self,
        discord_user_id: &str,
    ) -> Result<Option<Application>, DbErr> {
        let entity = entity::prelude::RecruitmentApplication::find()
            .filter(entity::recruitment_application::Column::DiscordUserId.eq(discord_user_id))
            .order_by_desc(entity::recruitment_application::Column::CreatedAt)
            .order_by_desc(entity::recruitment_application::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Application::from_entity))
    }
}
