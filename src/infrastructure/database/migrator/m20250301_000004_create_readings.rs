//! Create readings table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_members::Members;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Readings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Readings::MemberId).integer().not_null())
                    .col(
                        ColumnDef::new(Readings::PreviousReading)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::CurrentReading)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::Consumption)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::Anomaly)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Readings::ReadingDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Readings::RecordedBy).string().not_null())
                    .col(ColumnDef::new(Readings::Notes).string())
                    .col(
                        ColumnDef::new(Readings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_readings_member")
                            .from(Readings::Table, Readings::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_readings_member")
                    .table(Readings::Table)
                    .col(Readings::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_readings_date")
                    .table(Readings::Table)
                    .col(Readings::ReadingDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Readings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Readings {
    Table,
    Id,
    MemberId,
    PreviousReading,
    CurrentReading,
    Consumption,
    Anomaly,
    ReadingDate,
    RecordedBy,
    Notes,
    CreatedAt,
}
