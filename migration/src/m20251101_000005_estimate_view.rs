use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_estimate::Estimate;

static IDX_ESTIMATE_VIEW_ESTIMATE_ID: &str = "idx-estimate_view-estimate_id";
static FK_ESTIMATE_VIEW_ESTIMATE_ID: &str = "fk-estimate_view-estimate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EstimateView::Table)
                    .if_not_exists()
                    .col(pk_uuid(EstimateView::Id))
                    .col(uuid(EstimateView::EstimateId))
                    .col(string(EstimateView::Name))
                    .col(string_uniq(EstimateView::Token))
                    .col(string_null(EstimateView::Password))
                    .col(integer(EstimateView::SortOrder).default(0))
                    .col(timestamp(EstimateView::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ESTIMATE_VIEW_ESTIMATE_ID)
                            .from(EstimateView::Table, EstimateView::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_VIEW_ESTIMATE_ID)
                    .table(EstimateView::Table)
                    .col(EstimateView::EstimateId)
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
                    .name(IDX_ESTIMATE_VIEW_ESTIMATE_ID)
                    .table(EstimateView::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EstimateView::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EstimateView {
    Table,
    Id,
    EstimateId,
    Name,
    Token,
    Password,
    SortOrder,
    CreatedAt,
}
