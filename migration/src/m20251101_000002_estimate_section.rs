use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_estimate::Estimate;

static IDX_ESTIMATE_SECTION_ESTIMATE_ID: &str = "idx-estimate_section-estimate_id";
static FK_ESTIMATE_SECTION_ESTIMATE_ID: &str = "fk-estimate_section-estimate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EstimateSection::Table)
                    .if_not_exists()
                    .col(pk_uuid(EstimateSection::Id))
                    .col(uuid(EstimateSection::EstimateId))
                    .col(string(EstimateSection::Name))
                    .col(integer(EstimateSection::SortOrder).default(0))
                    .col(boolean(EstimateSection::ShowCustomer).default(true))
                    .col(boolean(EstimateSection::ShowMaster).default(true))
                    .col(timestamp(EstimateSection::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ESTIMATE_SECTION_ESTIMATE_ID)
                            .from(EstimateSection::Table, EstimateSection::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_SECTION_ESTIMATE_ID)
                    .table(EstimateSection::Table)
                    .col(EstimateSection::EstimateId)
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
                    .name(IDX_ESTIMATE_SECTION_ESTIMATE_ID)
                    .table(EstimateSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EstimateSection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EstimateSection {
    Table,
    Id,
    EstimateId,
    Name,
    SortOrder,
    ShowCustomer,
    ShowMaster,
    CreatedAt,
}
