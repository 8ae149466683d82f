use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Signups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Signups::Time).integer().not_null())
                    .col(ColumnDef::new(Signups::CamperId).integer().not_null())
                    .col(ColumnDef::new(Signups::ActivityId).integer().not_null())
                    .col(
                        ColumnDef::new(Signups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Signups::UpdatedAt).timestamp_with_time_zone())
                    // Deleting a parent with signups fails; callers remove signups first.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_camper_id_campers")
                            .from(Signups::Table, Signups::CamperId)
                            .to(Campers::Table, Campers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_activity_id_activities")
                            .from(Signups::Table, Signups::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_signups_camper_id")
                    .table(Signups::Table)
                    .col(Signups::CamperId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_signups_activity_id")
                    .table(Signups::Table)
                    .col(Signups::ActivityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Signups {
    Table,
    Id,
    Time,
    CamperId,
    ActivityId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Campers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
}
