use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::{db::SectionModel, estimate::SectionDto};

/// Repository for the `estimate_section` table
pub struct SectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SectionRepository<'a, C> {
    /// Creates a new instance of [`SectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a section to an estimate, visible to both legacy audiences
    pub async fn create(&self, estimate_id: Uuid, section: SectionDto) -> Result<SectionModel, DbErr> {
        let section = entity::estimate_section::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            estimate_id: ActiveValue::Set(estimate_id),
            name: ActiveValue::Set(section.name),
            sort_order: ActiveValue::Set(section.sort_order),
            show_customer: ActiveValue::Set(true),
            show_master: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        section.insert(self.db).await
    }

    /// Gets a section by ID
    pub async fn get_by_id(&self, section_id: Uuid) -> Result<Option<SectionModel>, DbErr> {
        entity::prelude::EstimateSection::find_by_id(section_id)
            .one(self.db)
            .await
    }

    /// Gets the sections of an estimate in display order
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<SectionModel>, DbErr> {
        entity::prelude::EstimateSection::find()
            .filter(entity::estimate_section::Column::EstimateId.eq(estimate_id))
            .order_by_asc(entity::estimate_section::Column::SortOrder)
            .order_by_asc(entity::estimate_section::Column::CreatedAt)
            .order_by_asc(entity::estimate_section::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the name & sort key of a section, `None` when it does not exist
    pub async fn update(
        &self,
        section_id: Uuid,
        section: SectionDto,
    ) -> Result<Option<SectionModel>, DbErr> {
        let existing = match self.get_by_id(section_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut section_am = existing.into_active_model();
        section_am.name = ActiveValue::Set(section.name);
        section_am.sort_order = ActiveValue::Set(section.sort_order);

        Ok(Some(section_am.update(self.db).await?))
    }

    /// Deletes a section and its items
    ///
    /// Returns OK regardless of the section existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, section_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::EstimateSection::delete_by_id(section_id)
            .exec(self.db)
            .await
    }
}
