use crate::data::recruitment::RecruitmentApplicationRepository;
use crate::model::recruitment::{ApplicationStatus, NewApplicationParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::recruitment_application::ApplicationFactory;

mod find_latest_by_user;
mod insert;
