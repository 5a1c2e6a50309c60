//! Migration: Create the costs table.
//!
//! This service only reads the ledger; writes belong to the cost
//! service. The user_id index supports per-user total aggregation.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Costs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Costs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Costs::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Costs::Amount).double().not_null())
                    .col(ColumnDef::new(Costs::Description).string().null())
                    .col(ColumnDef::new(Costs::Category).string().null())
                    .col(
                        ColumnDef::new(Costs::Date)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_costs_user_id")
                    .table(Costs::Table)
                    .col(Costs::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_costs_user_id").table(Costs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Costs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Costs {
    Table,
    Id,
    UserId,
    Amount,
    Description,
    Category,
    Date,
}
