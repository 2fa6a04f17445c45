use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_estimate_section::EstimateSection,
    m20251101_000003_estimate_item::EstimateItem, m20251101_000005_estimate_view::EstimateView,
};

static IDX_VIEW_SECTION_SETTING_VIEW_ID_SECTION_ID: &str =
    "idx-view_section_setting-view_id-section_id";
static IDX_VIEW_ITEM_SETTING_VIEW_ID_ITEM_ID: &str = "idx-view_item_setting-view_id-item_id";
static FK_VIEW_SECTION_SETTING_VIEW_ID: &str = "fk-view_section_setting-view_id";
static FK_VIEW_SECTION_SETTING_SECTION_ID: &str = "fk-view_section_setting-section_id";
static FK_VIEW_ITEM_SETTING_VIEW_ID: &str = "fk-view_item_setting-view_id";
static FK_VIEW_ITEM_SETTING_ITEM_ID: &str = "fk-view_item_setting-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ViewSectionSetting::Table)
                    .if_not_exists()
                    .col(pk_uuid(ViewSectionSetting::Id))
                    .col(uuid(ViewSectionSetting::ViewId))
                    .col(uuid(ViewSectionSetting::SectionId))
                    .col(boolean(ViewSectionSetting::Visible).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VIEW_SECTION_SETTING_VIEW_ID)
                            .from(ViewSectionSetting::Table, ViewSectionSetting::ViewId)
                            .to(EstimateView::Table, EstimateView::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VIEW_SECTION_SETTING_SECTION_ID)
                            .from(ViewSectionSetting::Table, ViewSectionSetting::SectionId)
                            .to(EstimateSection::Table, EstimateSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The (view, section) pair is the upsert conflict target
        manager
            .create_index(
                Index::create()
                    .name(IDX_VIEW_SECTION_SETTING_VIEW_ID_SECTION_ID)
                    .table(ViewSectionSetting::Table)
                    .col(ViewSectionSetting::ViewId)
                    .col(ViewSectionSetting::SectionId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ViewItemSetting::Table)
                    .if_not_exists()
                    .col(pk_uuid(ViewItemSetting::Id))
                    .col(uuid(ViewItemSetting::ViewId))
                    .col(uuid(ViewItemSetting::ItemId))
                    .col(decimal_len(ViewItemSetting::Price, 16, 4))
                    .col(decimal_len(ViewItemSetting::Total, 16, 4))
                    .col(boolean(ViewItemSetting::Visible).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VIEW_ITEM_SETTING_VIEW_ID)
                            .from(ViewItemSetting::Table, ViewItemSetting::ViewId)
                            .to(EstimateView::Table, EstimateView::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VIEW_ITEM_SETTING_ITEM_ID)
                            .from(ViewItemSetting::Table, ViewItemSetting::ItemId)
                            .to(EstimateItem::Table, EstimateItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VIEW_ITEM_SETTING_VIEW_ID_ITEM_ID)
                    .table(ViewItemSetting::Table)
                    .col(ViewItemSetting::ViewId)
                    .col(ViewItemSetting::ItemId)
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
                    .name(IDX_VIEW_ITEM_SETTING_VIEW_ID_ITEM_ID)
                    .table(ViewItemSetting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ViewItemSetting::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VIEW_SECTION_SETTING_VIEW_ID_SECTION_ID)
                    .table(ViewSectionSetting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ViewSectionSetting::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ViewSectionSetting {
    Table,
    Id,
    ViewId,
    SectionId,
    Visible,
}

#[derive(DeriveIden)]
pub enum ViewItemSetting {
    Table,
    Id,
    ViewId,
    ItemId,
    Price,
    Total,
    Visible,
}
