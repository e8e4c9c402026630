//! Create tariff_tiers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TariffTiers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TariffTiers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TariffTiers::TierMin)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TariffTiers::TierMax).big_integer())
                    .col(
                        ColumnDef::new(TariffTiers::UnitPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TariffTiers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TariffTiers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tariff_tiers_active")
                    .table(TariffTiers::Table)
                    .col(TariffTiers::IsActive)
                    .to_owned(),
            )
            .await?;

        // Seed the standard APR table: 0-10, 11-20, 21-30, 31+
        for (min, max, price) in [
            (0i64, Some(10i64), 500),
            (11, Some(20), 800),
            (21, Some(30), 1200),
            (31, None, 2000),
        ] {
            let insert = Query::insert()
                .into_table(TariffTiers::Table)
                .columns([
                    TariffTiers::TierMin,
                    TariffTiers::TierMax,
                    TariffTiers::UnitPrice,
                    TariffTiers::IsActive,
                    TariffTiers::CreatedAt,
                ])
                .values_panic([
                    min.into(),
                    max.into(),
                    price.into(),
                    true.into(),
                    chrono::Utc::now().to_rfc3339().into(),
                ])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TariffTiers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TariffTiers {
    Table,
    Id,
    TierMin,
    TierMax,
    UnitPrice,
    IsActive,
    CreatedAt,
}
