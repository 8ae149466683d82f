use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campers::Name).string().not_null())
                    .col(ColumnDef::new(Campers::Age).integer().not_null())
                    .col(
                        ColumnDef::new(Campers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Campers::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Campers {
    Table,
    Id,
    Name,
    Age,
    CreatedAt,
    UpdatedAt,
}
