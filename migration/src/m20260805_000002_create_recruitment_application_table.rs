use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecruitmentApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(RecruitmentApplication::Id))
                    .col(string(RecruitmentApplication::DiscordUserId))
                    .col(string(RecruitmentApplication::DiscordUsername))
                    .col(string_null(RecruitmentApplication::Surname))
                    .col(string(RecruitmentApplication::Ign))
                    .col(string_null(RecruitmentApplication::Role))
                    .col(string_null(RecruitmentApplication::Rank))
                    .col(string_null(RecruitmentApplication::TrackerLink))
                    .col(string(RecruitmentApplication::Status))
                    .col(
                        timestamp(RecruitmentApplication::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Status lookups are always per applicant, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_recruitment_application_user")
                    .table(RecruitmentApplication::Table)
                    .col(RecruitmentApplication::DiscordUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecruitmentApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecruitmentApplication {
    Table,
    Id,
    DiscordUserId,
    DiscordUsername,
    Surname,
    Ign,
    Role,
    Rank,
    TrackerLink,
    Status,
    CreatedAt,
}
