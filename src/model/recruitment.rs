use chrono::NaiveDateTime;

/// Review status of a trial application.
///
/// The bot only ever writes `Pending`; the other states are set by admins
/// through the web portal and read back by the `trial-status` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Parses the stored status string, defaulting unknown values to pending.
    pub fn from_str(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "reviewed" => ApplicationStatus::Reviewed,
            "accepted" => ApplicationStatus::Accepted,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Capitalized label for embed fields.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// One submitted trial application.
#[derive(Clone, Debug, PartialEq)]
pub struct Application {
    pub id: i32,
    pub discord_user_id: String,
    pub discord_username: String,
    pub surname: Option<String>,
    pub ign: String,
    pub role: Option<String>,
    pub rank: Option<String>,
    pub tracker_link: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: NaiveDateTime,
}

impl Application {
    /// Converts a database entity into the domain model.
    pub fn from_entity(entity: entity::recruitment_application::Model) -> Self {
        Self {
            id: entity.id,
            discord_user_id: entity.discord_user_id,
            discord_username: entity.discord_username,
            surname: entity.surname,
            ign: entity.ign,
            role: entity.role,
            rank: entity.rank,
            tracker_link: entity.tracker_link,
            status: ApplicationStatus::from_str(&entity.status),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a freshly submitted application.
#[derive(Clone, Debug)]
pub struct NewApplicationParam {
    pub discord_user_id: String,
    pub discord_username: String,
    pub surname: Option<String>,
    pub ign: String,
    pub role: Option<String>,
    pub rank: Option<String>,
    pub tracker_link: Option<String>,
}
