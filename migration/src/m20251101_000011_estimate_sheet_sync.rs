use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_estimate::Estimate;

/// Adds the external sheet columns to `estimate`.
///
/// Data directories created before sheet sync existed may already carry some of these
/// columns, so each one is checked against the live table before it is added.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_column("estimate", "sheet_url").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Estimate::Table)
                        .add_column(string_null(Estimate::SheetUrl))
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("estimate", "column_mapping").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Estimate::Table)
                        .add_column(json(Estimate::ColumnMapping).default("{}"))
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("estimate", "last_synced_at").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Estimate::Table)
                        .add_column(timestamp_null(Estimate::LastSyncedAt))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Estimate::LastSyncedAt,
            Estimate::ColumnMapping,
            Estimate::SheetUrl,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Estimate::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
