use crate::data::settings::{BotSettingRepository, RECRUITMENT_ACTIVE_KEY};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod get;
mod is_enabled;
