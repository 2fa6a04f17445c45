use sea_orm_migration::{prelude::*, schema::*};

static IDX_ESTIMATE_OWNER_ID: &str = "idx-estimate-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tokens & password are the legacy customer/master access columns, they are
        // only read by the legacy view migration.
        manager
            .create_table(
                Table::create()
                    .table(Estimate::Table)
                    .if_not_exists()
                    .col(pk_uuid(Estimate::Id))
                    .col(uuid(Estimate::OwnerId))
                    .col(string(Estimate::Title))
                    .col(string_null(Estimate::CustomerToken).unique_key())
                    .col(string_null(Estimate::MasterToken).unique_key())
                    .col(string_null(Estimate::MasterPassword))
                    .col(timestamp(Estimate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_OWNER_ID)
                    .table(Estimate::Table)
                    .col(Estimate::OwnerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ESTIMATE_OWNER_ID)
                    .table(Estimate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Estimate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Estimate {
    Table,
    Id,
    OwnerId,
    Title,
    CustomerToken,
    MasterToken,
    MasterPassword,
    CreatedAt,
    SheetUrl,
    ColumnMapping,
    LastSyncedAt,
}
