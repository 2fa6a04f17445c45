use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::{
    db::{ItemModel, SectionModel},
    estimate::ItemDto,
};

/// Repository for the `estimate_item` table
pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an item inside `section`, inheriting the section's estimate
    ///
    /// Items created here carry no embedded pricing, per-view prices are stored as view
    /// item settings.
    pub async fn create(&self, section: &SectionModel, item: ItemDto) -> Result<ItemModel, DbErr> {
        let item = entity::estimate_item::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            section_id: ActiveValue::Set(section.id),
            estimate_id: ActiveValue::Set(section.estimate_id),
            number: ActiveValue::Set(item.number),
            name: ActiveValue::Set(item.name),
            unit: ActiveValue::Set(item.unit),
            quantity: ActiveValue::Set(item.quantity),
            sort_order: ActiveValue::Set(item.sort_order),
            customer_price: ActiveValue::Set(None),
            customer_total: ActiveValue::Set(None),
            show_customer: ActiveValue::Set(true),
            master_price: ActiveValue::Set(None),
            master_total: ActiveValue::Set(None),
            show_master: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        item.insert(self.db).await
    }

    /// Gets an item by ID
    pub async fn get_by_id(&self, item_id: Uuid) -> Result<Option<ItemModel>, DbErr> {
        entity::prelude::EstimateItem::find_by_id(item_id)
            .one(self.db)
            .await
    }

    /// Gets every item of an estimate ordered by their position within their section
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::EstimateItem::find()
            .filter(entity::estimate_item::Column::EstimateId.eq(estimate_id))
            .order_by_asc(entity::estimate_item::Column::SortOrder)
            .order_by_asc(entity::estimate_item::Column::CreatedAt)
            .order_by_asc(entity::estimate_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the items of a section in display order
    pub async fn get_many_by_section_id(&self, section_id: Uuid) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::EstimateItem::find()
            .filter(entity::estimate_item::Column::SectionId.eq(section_id))
            .order_by_asc(entity::estimate_item::Column::SortOrder)
            .order_by_asc(entity::estimate_item::Column::CreatedAt)
            .order_by_asc(entity::estimate_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of an item, `None` when it does not exist
    pub async fn update(&self, item_id: Uuid, item: ItemDto) -> Result<Option<ItemModel>, DbErr> {
        let existing = match self.get_by_id(item_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut item_am = existing.into_active_model();
        item_am.number = ActiveValue::Set(item.number);
        item_am.name = ActiveValue::Set(item.name);
        item_am.unit = ActiveValue::Set(item.unit);
        item_am.quantity = ActiveValue::Set(item.quantity);
        item_am.sort_order = ActiveValue::Set(item.sort_order);

        Ok(Some(item_am.update(self.db).await?))
    }

    /// Deletes an item along with its per-view settings
    ///
    /// Returns OK regardless of the item existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, item_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::EstimateItem::delete_by_id(item_id)
            .exec(self.db)
            .await
    }
}
