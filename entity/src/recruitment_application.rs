use sea_orm::entity::prelude::*;

/// One submitted trial application from the DM questionnaire.
///
/// `status` moves through pending -> reviewed -> accepted/rejected and is
/// updated by admins through the web portal, not by the bot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recruitment_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub discord_user_id: String,
    pub discord_username: String,
    pub surname: Option<String>,
    pub ign: String,
    pub role: Option<String>,
    pub rank: Option<String>,
    pub tracker_link: Option<String>,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
