//! SeaORM entity models for the bot's persistent tables.

pub mod bot_setting;
pub mod recruitment_application;

pub mod prelude;
