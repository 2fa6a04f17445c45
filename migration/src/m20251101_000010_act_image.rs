use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_estimate::Estimate;

static IDX_ACT_IMAGE_ESTIMATE_ID_IMAGE_TYPE: &str = "idx-act_image-estimate_id-image_type";
static FK_ACT_IMAGE_ESTIMATE_ID: &str = "fk-act_image-estimate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActImage::Table)
                    .if_not_exists()
                    .col(pk_uuid(ActImage::Id))
                    .col(uuid(ActImage::EstimateId))
                    .col(string(ActImage::ImageType))
                    .col(text(ActImage::Data))
                    .col(timestamp(ActImage::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACT_IMAGE_ESTIMATE_ID)
                            .from(ActImage::Table, ActImage::EstimateId)
                            .to(Estimate::Table, Estimate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One logo, stamp & signature per estimate
        manager
            .create_index(
                Index::create()
                    .name(IDX_ACT_IMAGE_ESTIMATE_ID_IMAGE_TYPE)
                    .table(ActImage::Table)
                    .col(ActImage::EstimateId)
                    .col(ActImage::ImageType)
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
                    .name(IDX_ACT_IMAGE_ESTIMATE_ID_IMAGE_TYPE)
                    .table(ActImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ActImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ActImage {
    Table,
    Id,
    EstimateId,
    ImageType,
    Data,
    CreatedAt,
}
