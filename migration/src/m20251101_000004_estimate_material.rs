use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_estimate::Estimate;

static IDX_ESTIMATE_MATERIAL_ESTIMATE_ID: &str = "idx-estimate_material-estimate_id";
static FK_ESTIMATE_MATERIAL_ESTIMATE_ID: &str = "fk-estimate_material-estimate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EstimateMaterial::Table)
                    .if_not_exists()
                    .col(pk_uuid(EstimateMaterial::Id))
                    .col(uuid(EstimateMaterial::EstimateId))
                    .col(string(EstimateMaterial::Name))
                    .col(string(EstimateMaterial::Unit))
                    .col(decimal_len(EstimateMaterial::Quantity, 16, 4))
                    .col(decimal_len(EstimateMaterial::Price, 16, 4))
                    .col(decimal_len(EstimateMaterial::Total, 16, 4))
                    .col(integer(EstimateMaterial::SortOrder).default(0))
                    .col(timestamp(EstimateMaterial::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ESTIMATE_MATERIAL_ESTIMATE_ID)
                            .from(EstimateMaterial::Table, EstimateMaterial::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ESTIMATE_MATERIAL_ESTIMATE_ID)
                    .table(EstimateMaterial::Table)
                    .col(EstimateMaterial::EstimateId)
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
                    .name(IDX_ESTIMATE_MATERIAL_ESTIMATE_ID)
                    .table(EstimateMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EstimateMaterial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EstimateMaterial {
    Table,
    Id,
    EstimateId,
    Name,
    Unit,
    Quantity,
    Price,
    Total,
    SortOrder,
    CreatedAt,
}
