//! Rows copied into a version.
//!
//! Snapshot rows are written once, in bulk, by the transaction creating the version and are
//! never updated afterwards. Reads return them in the order the live estimate had them.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    data::INSERT_BATCH_SIZE,
    model::db::{
        VersionItemModel, VersionSectionModel, VersionViewItemSettingModel, VersionViewModel,
        VersionViewSectionSettingModel,
    },
};

/// Repository for the `version_*` tables holding the rows copied into a version
pub struct VersionSnapshotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VersionSnapshotRepository<'a, C> {
    /// Creates a new instance of [`VersionSnapshotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts copied sections in batches
    pub async fn insert_sections(
        &self,
        sections: Vec<entity::version_section::ActiveModel>,
    ) -> Result<(), DbErr> {
        for chunk in sections.chunks(INSERT_BATCH_SIZE) {
            entity::prelude::VersionSection::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Inserts copied items in batches
    pub async fn insert_items(
        &self,
        items: Vec<entity::version_item::ActiveModel>,
    ) -> Result<(), DbErr> {
        for chunk in items.chunks(INSERT_BATCH_SIZE) {
            entity::prelude::VersionItem::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Inserts copied views in batches
    pub async fn insert_views(
        &self,
        views: Vec<entity::version_view::ActiveModel>,
    ) -> Result<(), DbErr> {
        for chunk in views.chunks(INSERT_BATCH_SIZE) {
            entity::prelude::VersionView::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Inserts copied section settings in batches
    pub async fn insert_section_settings(
        &self,
        settings: Vec<entity::version_view_section_setting::ActiveModel>,
    ) -> Result<(), DbErr> {
        for chunk in settings.chunks(INSERT_BATCH_SIZE) {
            entity::prelude::VersionViewSectionSetting::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Inserts copied item settings in batches
    pub async fn insert_item_settings(
        &self,
        settings: Vec<entity::version_view_item_setting::ActiveModel>,
    ) -> Result<(), DbErr> {
        for chunk in settings.chunks(INSERT_BATCH_SIZE) {
            entity::prelude::VersionViewItemSetting::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Gets the copied sections of a version in display order
    pub async fn get_sections(&self, version_id: Uuid) -> Result<Vec<VersionSectionModel>, DbErr> {
        entity::prelude::VersionSection::find()
            .filter(entity::version_section::Column::VersionId.eq(version_id))
            .order_by_asc(entity::version_section::Column::SortOrder)
            .order_by_asc(entity::version_section::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the copied items of a version in display order
    pub async fn get_items(&self, version_id: Uuid) -> Result<Vec<VersionItemModel>, DbErr> {
        entity::prelude::VersionItem::find()
            .filter(entity::version_item::Column::VersionId.eq(version_id))
            .order_by_asc(entity::version_item::Column::SortOrder)
            .order_by_asc(entity::version_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the copied views of a version in display order
    pub async fn get_views(&self, version_id: Uuid) -> Result<Vec<VersionViewModel>, DbErr> {
        entity::prelude::VersionView::find()
            .filter(entity::version_view::Column::VersionId.eq(version_id))
            .order_by_asc(entity::version_view::Column::SortOrder)
            .order_by_asc(entity::version_view::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a copied view by ID
    pub async fn get_view(&self, version_view_id: Uuid) -> Result<Option<VersionViewModel>, DbErr> {
        entity::prelude::VersionView::find_by_id(version_view_id)
            .one(self.db)
            .await
    }

    /// Gets the copied section settings of one version view
    pub async fn get_section_settings(
        &self,
        version_view_ids: &[Uuid],
    ) -> Result<Vec<VersionViewSectionSettingModel>, DbErr> {
        if version_view_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::VersionViewSectionSetting::find()
            .filter(
                entity::version_view_section_setting::Column::VersionViewId
                    .is_in(version_view_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    /// Gets the copied item settings of one version view
    pub async fn get_item_settings(
        &self,
        version_view_ids: &[Uuid],
    ) -> Result<Vec<VersionViewItemSettingModel>, DbErr> {
        if version_view_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::VersionViewItemSetting::find()
            .filter(
                entity::version_view_item_setting::Column::VersionViewId
                    .is_in(version_view_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }
}
