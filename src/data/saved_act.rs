use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::{
    data::INSERT_BATCH_SIZE,
    model::db::{SavedActItemModel, SavedActModel},
};

/// Repository for the `saved_act` & `saved_act_item` tables
pub struct SavedActRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SavedActRepository<'a, C> {
    /// Creates a new instance of [`SavedActRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an act header and its lines
    pub async fn create(
        &self,
        act: entity::saved_act::ActiveModel,
        items: Vec<entity::saved_act_item::ActiveModel>,
    ) -> Result<SavedActModel, DbErr> {
        let act = act.insert(self.db).await?;

        for chunk in items.chunks(INSERT_BATCH_SIZE) {
            entity::prelude::SavedActItem::insert_many(chunk.to_vec())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(act)
    }

    /// Gets an act header by ID
    pub async fn get_by_id(&self, act_id: Uuid) -> Result<Option<SavedActModel>, DbErr> {
        entity::prelude::SavedAct::find_by_id(act_id)
            .one(self.db)
            .await
    }

    /// Gets the acts of an estimate, most recently created first
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<SavedActModel>, DbErr> {
        entity::prelude::SavedAct::find()
            .filter(entity::saved_act::Column::EstimateId.eq(estimate_id))
            .order_by_desc(entity::saved_act::Column::CreatedAt)
            .order_by_desc(entity::saved_act::Column::ActDate)
            .all(self.db)
            .await
    }

    /// Gets the lines of an act in print order
    pub async fn get_items(&self, act_id: Uuid) -> Result<Vec<SavedActItemModel>, DbErr> {
        entity::prelude::SavedActItem::find()
            .filter(entity::saved_act_item::Column::SavedActId.eq(act_id))
            .order_by_asc(entity::saved_act_item::Column::SortOrder)
            .all(self.db)
            .await
    }

    /// Deletes an act and its lines
    ///
    /// Returns OK regardless of the act existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, act_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::SavedAct::delete_by_id(act_id)
            .exec(self.db)
            .await
    }
}
