use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::db::VersionModel;

/// Repository for the `estimate_version` table
pub struct VersionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VersionRepository<'a, C> {
    /// Creates a new instance of [`VersionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Number the next version of an estimate would receive, starting at 1
    ///
    /// Only reliable inside the transaction that inserts the version, concurrent callers are
    /// serialized by the unique index on (estimate_id, version_number).
    pub async fn next_version_number(&self, estimate_id: Uuid) -> Result<i32, DbErr> {
        let latest = entity::prelude::EstimateVersion::find()
            .filter(entity::estimate_version::Column::EstimateId.eq(estimate_id))
            .order_by_desc(entity::estimate_version::Column::VersionNumber)
            .one(self.db)
            .await?;

        Ok(latest.map(|version| version.version_number + 1).unwrap_or(1))
    }

    /// Inserts a version header, fails on the unique index when `version_number` is taken
    pub async fn create(
        &self,
        estimate_id: Uuid,
        version_number: i32,
        label: Option<String>,
    ) -> Result<VersionModel, DbErr> {
        let version = entity::estimate_version::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            estimate_id: ActiveValue::Set(estimate_id),
            version_number: ActiveValue::Set(version_number),
            label: ActiveValue::Set(label),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        version.insert(self.db).await
    }

    /// Gets a version header by ID
    pub async fn get_by_id(&self, version_id: Uuid) -> Result<Option<VersionModel>, DbErr> {
        entity::prelude::EstimateVersion::find_by_id(version_id)
            .one(self.db)
            .await
    }

    /// Gets the versions of an estimate, newest first
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<VersionModel>, DbErr> {
        entity::prelude::EstimateVersion::find()
            .filter(entity::estimate_version::Column::EstimateId.eq(estimate_id))
            .order_by_desc(entity::estimate_version::Column::VersionNumber)
            .all(self.db)
            .await
    }

    /// Deletes a version and every snapshot row it owns
    ///
    /// Returns OK regardless of the version existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, version_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::EstimateVersion::delete_by_id(version_id)
            .exec(self.db)
            .await
    }
}
