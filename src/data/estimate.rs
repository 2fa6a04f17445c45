use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::{db::EstimateModel, estimate::EstimateDto};

/// Repository for the `estimate` table
pub struct EstimateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EstimateRepository<'a, C> {
    /// Creates a new instance of [`EstimateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new estimate without legacy sharing tokens
    pub async fn create(&self, owner_id: Uuid, estimate: EstimateDto) -> Result<EstimateModel, DbErr> {
        let estimate = entity::estimate::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(owner_id),
            title: ActiveValue::Set(estimate.title),
            customer_token: ActiveValue::Set(None),
            master_token: ActiveValue::Set(None),
            master_password: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            sheet_url: ActiveValue::Set(estimate.sheet_url),
            column_mapping: ActiveValue::Set(estimate.column_mapping),
            last_synced_at: ActiveValue::Set(None),
        };

        estimate.insert(self.db).await
    }

    /// Gets an estimate by ID
    pub async fn get_by_id(&self, estimate_id: Uuid) -> Result<Option<EstimateModel>, DbErr> {
        entity::prelude::Estimate::find_by_id(estimate_id)
            .one(self.db)
            .await
    }

    /// Gets every estimate owned by `owner_id`, oldest first
    pub async fn get_many_by_owner_id(&self, owner_id: Uuid) -> Result<Vec<EstimateModel>, DbErr> {
        entity::prelude::Estimate::find()
            .filter(entity::estimate::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::estimate::Column::CreatedAt)
            .order_by_asc(entity::estimate::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every estimate, oldest first
    pub async fn get_all(&self) -> Result<Vec<EstimateModel>, DbErr> {
        entity::prelude::Estimate::find()
            .order_by_asc(entity::estimate::Column::CreatedAt)
            .order_by_asc(entity::estimate::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts estimates across every owner
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Estimate::find().count(self.db).await
    }

    /// Replaces the editable fields of an estimate, `None` when it does not exist
    pub async fn update(
        &self,
        estimate_id: Uuid,
        estimate: EstimateDto,
    ) -> Result<Option<EstimateModel>, DbErr> {
        let existing = match self.get_by_id(estimate_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut estimate_am = existing.into_active_model();
        estimate_am.title = ActiveValue::Set(estimate.title);
        estimate_am.sheet_url = ActiveValue::Set(estimate.sheet_url);
        estimate_am.column_mapping = ActiveValue::Set(estimate.column_mapping);

        Ok(Some(estimate_am.update(self.db).await?))
    }

    /// Records a completed spreadsheet sync at the current time
    pub async fn mark_synced(&self, estimate_id: Uuid) -> Result<Option<EstimateModel>, DbErr> {
        let existing = match self.get_by_id(estimate_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut estimate_am = existing.into_active_model();
        estimate_am.last_synced_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(estimate_am.update(self.db).await?))
    }

    /// Deletes an estimate together with everything it owns
    ///
    /// Returns OK regardless of the estimate existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, estimate_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Estimate::delete_by_id(estimate_id)
            .exec(self.db)
            .await
    }
}
