use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::db::ViewModel;

/// Repository for the `estimate_view` table
pub struct ViewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViewRepository<'a, C> {
    /// Creates a new instance of [`ViewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a view
    ///
    /// Fails with a unique constraint violation when `token` is already taken.
    pub async fn create(
        &self,
        estimate_id: Uuid,
        name: String,
        token: String,
        password: Option<String>,
        sort_order: i32,
    ) -> Result<ViewModel, DbErr> {
        let view = entity::estimate_view::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            estimate_id: ActiveValue::Set(estimate_id),
            name: ActiveValue::Set(name),
            token: ActiveValue::Set(token),
            password: ActiveValue::Set(password),
            sort_order: ActiveValue::Set(sort_order),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        view.insert(self.db).await
    }

    /// Gets a view by ID
    pub async fn get_by_id(&self, view_id: Uuid) -> Result<Option<ViewModel>, DbErr> {
        entity::prelude::EstimateView::find_by_id(view_id)
            .one(self.db)
            .await
    }

    /// Gets the view holding a share token
    pub async fn get_by_token(&self, token: &str) -> Result<Option<ViewModel>, DbErr> {
        entity::prelude::EstimateView::find()
            .filter(entity::estimate_view::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Gets the views of an estimate in display order
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<ViewModel>, DbErr> {
        entity::prelude::EstimateView::find()
            .filter(entity::estimate_view::Column::EstimateId.eq(estimate_id))
            .order_by_asc(entity::estimate_view::Column::SortOrder)
            .order_by_asc(entity::estimate_view::Column::CreatedAt)
            .order_by_asc(entity::estimate_view::Column::Id)
            .all(self.db)
            .await
    }

    /// Sort key placing a new view after every existing view of the estimate
    pub async fn next_sort_order(&self, estimate_id: Uuid) -> Result<i32, DbErr> {
        let last = entity::prelude::EstimateView::find()
            .filter(entity::estimate_view::Column::EstimateId.eq(estimate_id))
            .order_by_desc(entity::estimate_view::Column::SortOrder)
            .one(self.db)
            .await?;

        Ok(last.map(|view| view.sort_order + 1).unwrap_or(0))
    }

    /// Counts views across every estimate
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::EstimateView::find().count(self.db).await
    }

    /// Renames a view, `None` when it does not exist
    pub async fn update_name(&self, view_id: Uuid, name: String) -> Result<Option<ViewModel>, DbErr> {
        let existing = match self.get_by_id(view_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut view_am = existing.into_active_model();
        view_am.name = ActiveValue::Set(name);

        Ok(Some(view_am.update(self.db).await?))
    }

    /// Sets or clears the password of a view, `None` when it does not exist
    pub async fn update_password(
        &self,
        view_id: Uuid,
        password: Option<String>,
    ) -> Result<Option<ViewModel>, DbErr> {
        let existing = match self.get_by_id(view_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut view_am = existing.into_active_model();
        view_am.password = ActiveValue::Set(password);

        Ok(Some(view_am.update(self.db).await?))
    }

    /// Deletes a view together with its section & item settings
    ///
    /// Returns OK regardless of the view existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, view_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::EstimateView::delete_by_id(view_id)
            .exec(self.db)
            .await
    }
}
