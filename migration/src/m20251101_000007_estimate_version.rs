use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_estimate::Estimate;

static IDX_ESTIMATE_VERSION_ESTIMATE_ID_VERSION_NUMBER: &str =
    "idx-estimate_version-estimate_id-version_number";
static FK_ESTIMATE_VERSION_ESTIMATE_ID: &str = "fk-estimate_version-estimate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EstimateVersion::Table)
                    .if_not_exists()
                    .col(pk_uuid(EstimateVersion::Id))
                    .col(uuid(EstimateVersion::EstimateId))
                    .col(integer(EstimateVersion::VersionNumber))
                    .col(string_null(EstimateVersion::Label))
                    .col(timestamp(EstimateVersion::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ESTIMATE_VERSION_ESTIMATE_ID)
                            .from(EstimateVersion::Table, EstimateVersion::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Concurrent version creators race on this index rather than on an in-process lock
        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_VERSION_ESTIMATE_ID_VERSION_NUMBER)
                    .table(EstimateVersion::Table)
                    .col(EstimateVersion::EstimateId)
                    .col(EstimateVersion::VersionNumber)
                    .unique()
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
                    .name(IDX_ESTIMATE_VERSION_ESTIMATE_ID_VERSION_NUMBER)
                    .table(EstimateVersion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EstimateVersion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EstimateVersion {
    Table,
    Id,
    EstimateId,
    VersionNumber,
    Label,
    CreatedAt,
}
