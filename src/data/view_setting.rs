//! Per-view section visibility and item pricing.
//!
//! At most one row exists per (view, section) and per (view, item), enforced by unique
//! indexes. Writes are upserts keyed on those pairs so repeating a write never adds rows.

use migration::OnConflict;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    data::INSERT_BATCH_SIZE,
    model::db::{ViewItemSettingModel, ViewSectionSettingModel},
};

/// Price, total & visibility of one item in one view.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSetting {
    /// View the setting applies to.
    pub view_id: Uuid,
    /// Item the setting applies to.
    pub item_id: Uuid,
    /// Unit price shown in the view.
    pub price: Decimal,
    /// Line total shown in the view.
    pub total: Decimal,
    /// Whether the item is shown in the view.
    pub visible: bool,
}

/// Repository for the `view_section_setting` & `view_item_setting` tables
pub struct ViewSettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViewSettingRepository<'a, C> {
    /// Creates a new instance of [`ViewSettingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates the visibility of a section within a view
    pub async fn upsert_section(
        &self,
        view_id: Uuid,
        section_id: Uuid,
        visible: bool,
    ) -> Result<ViewSectionSettingModel, DbErr> {
        let setting = entity::view_section_setting::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            view_id: ActiveValue::Set(view_id),
            section_id: ActiveValue::Set(section_id),
            visible: ActiveValue::Set(visible),
        };

        entity::prelude::ViewSectionSetting::insert(setting)
            .on_conflict(
                OnConflict::columns([
                    entity::view_section_setting::Column::ViewId,
                    entity::view_section_setting::Column::SectionId,
                ])
                .update_column(entity::view_section_setting::Column::Visible)
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_section(view_id, section_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "section setting for view ID {} and section ID {}",
                view_id, section_id
            ))
        })
    }

    /// Inserts or updates the price, total & visibility of an item within a view
    pub async fn upsert_item(&self, setting: ItemSetting) -> Result<ViewItemSettingModel, DbErr> {
        let (view_id, item_id) = (setting.view_id, setting.item_id);

        entity::prelude::ViewItemSetting::insert(item_setting_am(setting))
            .on_conflict(
                OnConflict::columns([
                    entity::view_item_setting::Column::ViewId,
                    entity::view_item_setting::Column::ItemId,
                ])
                .update_columns([
                    entity::view_item_setting::Column::Price,
                    entity::view_item_setting::Column::Total,
                    entity::view_item_setting::Column::Visible,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_item(view_id, item_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "item setting for view ID {} and item ID {}",
                view_id, item_id
            ))
        })
    }

    /// Inserts section settings, leaving any already existing (view, section) pair untouched
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_sections_if_absent(
        &self,
        settings: Vec<(Uuid, Uuid, bool)>,
    ) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for chunk in settings.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|&(view_id, section_id, visible)| {
                entity::view_section_setting::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    view_id: ActiveValue::Set(view_id),
                    section_id: ActiveValue::Set(section_id),
                    visible: ActiveValue::Set(visible),
                }
            });

            inserted += entity::prelude::ViewSectionSetting::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        entity::view_section_setting::Column::ViewId,
                        entity::view_section_setting::Column::SectionId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Inserts item settings, leaving any already existing (view, item) pair untouched
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_items_if_absent(&self, settings: Vec<ItemSetting>) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for chunk in settings.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().cloned().map(item_setting_am);

            inserted += entity::prelude::ViewItemSetting::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        entity::view_item_setting::Column::ViewId,
                        entity::view_item_setting::Column::ItemId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    /// Gets the visibility row of a section within a view
    pub async fn get_section(
        &self,
        view_id: Uuid,
        section_id: Uuid,
    ) -> Result<Option<ViewSectionSettingModel>, DbErr> {
        entity::prelude::ViewSectionSetting::find()
            .filter(entity::view_section_setting::Column::ViewId.eq(view_id))
            .filter(entity::view_section_setting::Column::SectionId.eq(section_id))
            .one(self.db)
            .await
    }

    /// Gets the pricing row of an item within a view
    pub async fn get_item(
        &self,
        view_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<ViewItemSettingModel>, DbErr> {
        entity::prelude::ViewItemSetting::find()
            .filter(entity::view_item_setting::Column::ViewId.eq(view_id))
            .filter(entity::view_item_setting::Column::ItemId.eq(item_id))
            .one(self.db)
            .await
    }

    /// Gets the section settings of every view in `view_ids`
    pub async fn get_sections_by_view_ids(
        &self,
        view_ids: &[Uuid],
    ) -> Result<Vec<ViewSectionSettingModel>, DbErr> {
        if view_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ViewSectionSetting::find()
            .filter(entity::view_section_setting::Column::ViewId.is_in(view_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets the item settings of every view in `view_ids`
    pub async fn get_items_by_view_ids(
        &self,
        view_ids: &[Uuid],
    ) -> Result<Vec<ViewItemSettingModel>, DbErr> {
        if view_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ViewItemSetting::find()
            .filter(entity::view_item_setting::Column::ViewId.is_in(view_ids.iter().copied()))
            .all(self.db)
            .await
    }
}

fn item_setting_am(setting: ItemSetting) -> entity::view_item_setting::ActiveModel {
    entity::view_item_setting::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        view_id: ActiveValue::Set(setting.view_id),
        item_id: ActiveValue::Set(setting.item_id),
        price: ActiveValue::Set(setting.price),
        total: ActiveValue::Set(setting.total),
        visible: ActiveValue::Set(setting.visible),
    }
}
