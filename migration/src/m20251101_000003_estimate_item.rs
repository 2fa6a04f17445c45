use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_estimate::Estimate, m20251101_000002_estimate_section::EstimateSection,
};

static IDX_ESTIMATE_ITEM_SECTION_ID: &str = "idx-estimate_item-section_id";
static IDX_ESTIMATE_ITEM_ESTIMATE_ID: &str = "idx-estimate_item-estimate_id";
static FK_ESTIMATE_ITEM_SECTION_ID: &str = "fk-estimate_item-section_id";
static FK_ESTIMATE_ITEM_ESTIMATE_ID: &str = "fk-estimate_item-estimate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EstimateItem::Table)
                    .if_not_exists()
                    .col(pk_uuid(EstimateItem::Id))
                    .col(uuid(EstimateItem::SectionId))
                    .col(uuid(EstimateItem::EstimateId))
                    .col(string(EstimateItem::Number))
                    .col(string(EstimateItem::Name))
                    .col(string(EstimateItem::Unit))
                    .col(decimal_len(EstimateItem::Quantity, 16, 4))
                    .col(integer(EstimateItem::SortOrder).default(0))
                    .col(decimal_len_null(EstimateItem::CustomerPrice, 16, 4))
                    .col(decimal_len_null(EstimateItem::CustomerTotal, 16, 4))
                    .col(boolean(EstimateItem::ShowCustomer).default(true))
                    .col(decimal_len_null(EstimateItem::MasterPrice, 16, 4))
                    .col(decimal_len_null(EstimateItem::MasterTotal, 16, 4))
                    .col(boolean(EstimateItem::ShowMaster).default(true))
                    .col(timestamp(EstimateItem::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ESTIMATE_ITEM_SECTION_ID)
                            .from(EstimateItem::Table, EstimateItem::SectionId)
                            .to(EstimateSection::Table, EstimateSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ESTIMATE_ITEM_ESTIMATE_ID)
                            .from(EstimateItem::Table, EstimateItem::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_ITEM_SECTION_ID)
                    .table(EstimateItem::Table)
                    .col(EstimateItem::SectionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_ITEM_ESTIMATE_ID)
                    .table(EstimateItem::Table)
                    .col(EstimateItem::EstimateId)
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
                    .name(IDX_ESTIMATE_ITEM_ESTIMATE_ID)
                    .table(EstimateItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ESTIMATE_ITEM_SECTION_ID)
                    .table(EstimateItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EstimateItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EstimateItem {
    Table,
    Id,
    SectionId,
    EstimateId,
    Number,
    Name,
    Unit,
    Quantity,
    SortOrder,
    CustomerPrice,
    CustomerTotal,
    ShowCustomer,
    MasterPrice,
    MasterTotal,
    ShowMaster,
    CreatedAt,
}
