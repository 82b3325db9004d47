use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workouts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workouts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Workouts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Workouts::Name).string().not_null())
                    .col(ColumnDef::new(Workouts::Exercises).json_binary().not_null())
                    .col(
                        ColumnDef::new(Workouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Workouts::UpdatedAt).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workouts_user_id")
                            .from(Workouts::Table, Workouts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the owner-scoped, newest-first listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_workouts_user_id_created_at")
                    .table(Workouts::Table)
                    .col(Workouts::UserId)
                    .col((Workouts::CreatedAt, IndexOrder::Desc))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workouts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workouts {
    Table,
    Id,
    UserId,
    Name,
    Exercises,
    CreatedAt,
    UpdatedAt,
}
