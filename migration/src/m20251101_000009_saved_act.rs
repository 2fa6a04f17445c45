use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_estimate::Estimate, m20251101_000005_estimate_view::EstimateView};

static IDX_SAVED_ACT_ESTIMATE_ID: &str = "idx-saved_act-estimate_id";
static IDX_SAVED_ACT_ITEM_SAVED_ACT_ID: &str = "idx-saved_act_item-saved_act_id";
static FK_SAVED_ACT_ESTIMATE_ID: &str = "fk-saved_act-estimate_id";
static FK_SAVED_ACT_VIEW_ID: &str = "fk-saved_act-view_id";
static FK_SAVED_ACT_ITEM_SAVED_ACT_ID: &str = "fk-saved_act_item-saved_act_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavedAct::Table)
                    .if_not_exists()
                    .col(pk_uuid(SavedAct::Id))
                    .col(uuid(SavedAct::EstimateId))
                    .col(uuid_null(SavedAct::ViewId))
                    .col(string(SavedAct::Number))
                    .col(date(SavedAct::ActDate))
                    .col(string(SavedAct::SelectionMode))
                    .col(string_null(SavedAct::ExecutorName))
                    .col(string_null(SavedAct::CustomerName))
                    .col(string_null(SavedAct::DirectorName))
                    .col(decimal_len(SavedAct::GrandTotal, 16, 4))
                    .col(timestamp(SavedAct::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SAVED_ACT_ESTIMATE_ID)
                            .from(SavedAct::Table, SavedAct::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SAVED_ACT_VIEW_ID)
                            .from(SavedAct::Table, SavedAct::ViewId)
                            .to(EstimateView::Table, EstimateView::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SAVED_ACT_ESTIMATE_ID)
                    .table(SavedAct::Table)
                    .col(SavedAct::EstimateId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SavedActItem::Table)
                    .if_not_exists()
                    .col(pk_uuid(SavedActItem::Id))
                    .col(uuid(SavedActItem::SavedActId))
                    .col(uuid_null(SavedActItem::SectionId))
                    .col(uuid_null(SavedActItem::ItemId))
                    .col(string(SavedActItem::Name))
                    .col(string(SavedActItem::Unit))
                    .col(decimal_len(SavedActItem::Quantity, 16, 4))
                    .col(decimal_len(SavedActItem::Price, 16, 4))
                    .col(decimal_len(SavedActItem::Total, 16, 4))
                    .col(integer(SavedActItem::SortOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SAVED_ACT_ITEM_SAVED_ACT_ID)
                            .from(SavedActItem::Table, SavedActItem::SavedActId)
                            .to(SavedAct::Table, SavedAct::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SAVED_ACT_ITEM_SAVED_ACT_ID)
                    .table(SavedActItem::Table)
                    .col(SavedActItem::SavedActId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavedActItem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SavedAct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SavedAct {
    Table,
    Id,
    EstimateId,
    ViewId,
    Number,
    ActDate,
    SelectionMode,
    ExecutorName,
    CustomerName,
    DirectorName,
    GrandTotal,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum SavedActItem {
    Table,
    Id,
    SavedActId,
    SectionId,
    ItemId,
    Name,
    Unit,
    Quantity,
    Price,
    Total,
    SortOrder,
}
