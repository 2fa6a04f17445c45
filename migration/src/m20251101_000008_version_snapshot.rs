use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000007_estimate_version::EstimateVersion;

static IDX_VERSION_SECTION_VERSION_ID: &str = "idx-version_section-version_id";
static IDX_VERSION_ITEM_VERSION_ID: &str = "idx-version_item-version_id";
static IDX_VERSION_VIEW_VERSION_ID: &str = "idx-version_view-version_id";
static IDX_VERSION_VIEW_SECTION_SETTING_VERSION_VIEW_ID: &str =
    "idx-version_view_section_setting-version_view_id";
static IDX_VERSION_VIEW_ITEM_SETTING_VERSION_VIEW_ID: &str =
    "idx-version_view_item_setting-version_view_id";
static FK_VERSION_SECTION_VERSION_ID: &str = "fk-version_section-version_id";
static FK_VERSION_ITEM_VERSION_ID: &str = "fk-version_item-version_id";
static FK_VERSION_ITEM_VERSION_SECTION_ID: &str = "fk-version_item-version_section_id";
static FK_VERSION_VIEW_VERSION_ID: &str = "fk-version_view-version_id";
static FK_VERSION_VIEW_SECTION_SETTING_VERSION_VIEW_ID: &str =
    "fk-version_view_section_setting-version_view_id";
static FK_VERSION_VIEW_SECTION_SETTING_VERSION_SECTION_ID: &str =
    "fk-version_view_section_setting-version_section_id";
static FK_VERSION_VIEW_ITEM_SETTING_VERSION_VIEW_ID: &str =
    "fk-version_view_item_setting-version_view_id";
static FK_VERSION_VIEW_ITEM_SETTING_VERSION_ITEM_ID: &str =
    "fk-version_view_item_setting-version_item_id";

/// Frozen copies of sections, items, views & view settings owned by an estimate version.
///
/// The `original_*_id` columns are traceability references only and carry no foreign key,
/// the live rows they point at may be deleted while the version survives.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VersionSection::Table)
                    .if_not_exists()
                    .col(pk_uuid(VersionSection::Id))
                    .col(uuid(VersionSection::VersionId))
                    .col(uuid(VersionSection::OriginalSectionId))
                    .col(string(VersionSection::Name))
                    .col(integer(VersionSection::SortOrder))
                    .col(boolean(VersionSection::ShowCustomer))
                    .col(boolean(VersionSection::ShowMaster))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_SECTION_VERSION_ID)
                            .from(VersionSection::Table, VersionSection::VersionId)
                            .to(EstimateVersion::Table, EstimateVersion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VersionItem::Table)
                    .if_not_exists()
                    .col(pk_uuid(VersionItem::Id))
                    .col(uuid(VersionItem::VersionId))
                    .col(uuid(VersionItem::VersionSectionId))
                    .col(uuid(VersionItem::OriginalItemId))
                    .col(string(VersionItem::Number))
                    .col(string(VersionItem::Name))
                    .col(string(VersionItem::Unit))
                    .col(decimal_len(VersionItem::Quantity, 16, 4))
                    .col(integer(VersionItem::SortOrder))
                    .col(decimal_len_null(VersionItem::CustomerPrice, 16, 4))
                    .col(decimal_len_null(VersionItem::CustomerTotal, 16, 4))
                    .col(boolean(VersionItem::ShowCustomer))
                    .col(decimal_len_null(VersionItem::MasterPrice, 16, 4))
                    .col(decimal_len_null(VersionItem::MasterTotal, 16, 4))
                    .col(boolean(VersionItem::ShowMaster))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_ITEM_VERSION_ID)
                            .from(VersionItem::Table, VersionItem::VersionId)
                            .to(EstimateVersion::Table, EstimateVersion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_ITEM_VERSION_SECTION_ID)
                            .from(VersionItem::Table, VersionItem::VersionSectionId)
                            .to(VersionSection::Table, VersionSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VersionView::Table)
                    .if_not_exists()
                    .col(pk_uuid(VersionView::Id))
                    .col(uuid(VersionView::VersionId))
                    .col(uuid(VersionView::OriginalViewId))
                    .col(string(VersionView::Name))
                    .col(string(VersionView::Token))
                    .col(string_null(VersionView::Password))
                    .col(integer(VersionView::SortOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_VIEW_VERSION_ID)
                            .from(VersionView::Table, VersionView::VersionId)
                            .to(EstimateVersion::Table, EstimateVersion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VersionViewSectionSetting::Table)
                    .if_not_exists()
                    .col(pk_uuid(VersionViewSectionSetting::Id))
                    .col(uuid(VersionViewSectionSetting::VersionViewId))
                    .col(uuid(VersionViewSectionSetting::VersionSectionId))
                    .col(boolean(VersionViewSectionSetting::Visible))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_VIEW_SECTION_SETTING_VERSION_VIEW_ID)
                            .from(
                                VersionViewSectionSetting::Table,
                                VersionViewSectionSetting::VersionViewId,
                            )
                            .to(VersionView::Table, VersionView::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_VIEW_SECTION_SETTING_VERSION_SECTION_ID)
                            .from(
                                VersionViewSectionSetting::Table,
                                VersionViewSectionSetting::VersionSectionId,
                            )
                            .to(VersionSection::Table, VersionSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VersionViewItemSetting::Table)
                    .if_not_exists()
                    .col(pk_uuid(VersionViewItemSetting::Id))
                    .col(uuid(VersionViewItemSetting::VersionViewId))
                    .col(uuid(VersionViewItemSetting::VersionItemId))
                    .col(decimal_len(VersionViewItemSetting::Price, 16, 4))
                    .col(decimal_len(VersionViewItemSetting::Total, 16, 4))
                    .col(boolean(VersionViewItemSetting::Visible))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_VIEW_ITEM_SETTING_VERSION_VIEW_ID)
                            .from(
                                VersionViewItemSetting::Table,
                                VersionViewItemSetting::VersionViewId,
                            )
                            .to(VersionView::Table, VersionView::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERSION_VIEW_ITEM_SETTING_VERSION_ITEM_ID)
                            .from(
                                VersionViewItemSetting::Table,
                                VersionViewItemSetting::VersionItemId,
                            )
                            .to(VersionItem::Table, VersionItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VERSION_SECTION_VERSION_ID)
                    .table(VersionSection::Table)
                    .col(VersionSection::VersionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VERSION_ITEM_VERSION_ID)
                    .table(VersionItem::Table)
                    .col(VersionItem::VersionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VERSION_VIEW_VERSION_ID)
                    .table(VersionView::Table)
                    .col(VersionView::VersionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VERSION_VIEW_SECTION_SETTING_VERSION_VIEW_ID)
                    .table(VersionViewSectionSetting::Table)
                    .col(VersionViewSectionSetting::VersionViewId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VERSION_VIEW_ITEM_SETTING_VERSION_VIEW_ID)
                    .table(VersionViewItemSetting::Table)
                    .col(VersionViewItemSetting::VersionViewId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(VersionViewItemSetting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(VersionViewSectionSetting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VersionView::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VersionItem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VersionSection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VersionSection {
    Table,
    Id,
    VersionId,
    OriginalSectionId,
    Name,
    SortOrder,
    ShowCustomer,
    ShowMaster,
}

#[derive(DeriveIden)]
pub enum VersionItem {
    Table,
    Id,
    VersionId,
    VersionSectionId,
    OriginalItemId,
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
}

#[derive(DeriveIden)]
pub enum VersionView {
    Table,
    Id,
    VersionId,
    OriginalViewId,
    Name,
    Token,
    Password,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum VersionViewSectionSetting {
    Table,
    Id,
    VersionViewId,
    VersionSectionId,
    Visible,
}

#[derive(DeriveIden)]
pub enum VersionViewItemSetting {
    Table,
    Id,
    VersionViewId,
    VersionItemId,
    Price,
    Total,
    Visible,
}
