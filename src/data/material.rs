use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::{db::MaterialModel, estimate::MaterialDto};

/// Repository for the `estimate_material` table
pub struct MaterialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaterialRepository<'a, C> {
    /// Creates a new instance of [`MaterialRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a material line to an estimate
    pub async fn create(&self, estimate_id: Uuid, material: MaterialDto) -> Result<MaterialModel, DbErr> {
        let material = entity::estimate_material::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            estimate_id: ActiveValue::Set(estimate_id),
            name: ActiveValue::Set(material.name),
            unit: ActiveValue::Set(material.unit),
            quantity: ActiveValue::Set(material.quantity),
            price: ActiveValue::Set(material.price),
            total: ActiveValue::Set(material.total),
            sort_order: ActiveValue::Set(material.sort_order),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        material.insert(self.db).await
    }

    /// Gets a material line by ID
    pub async fn get_by_id(&self, material_id: Uuid) -> Result<Option<MaterialModel>, DbErr> {
        entity::prelude::EstimateMaterial::find_by_id(material_id)
            .one(self.db)
            .await
    }

    /// Gets the material lines of an estimate in display order
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<MaterialModel>, DbErr> {
        entity::prelude::EstimateMaterial::find()
            .filter(entity::estimate_material::Column::EstimateId.eq(estimate_id))
            .order_by_asc(entity::estimate_material::Column::SortOrder)
            .order_by_asc(entity::estimate_material::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Replaces the fields of a material line, `None` when it does not exist
    pub async fn update(
        &self,
        material_id: Uuid,
        material: MaterialDto,
    ) -> Result<Option<MaterialModel>, DbErr> {
        let existing = match self.get_by_id(material_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut material_am = existing.into_active_model();
        material_am.name = ActiveValue::Set(material.name);
        material_am.unit = ActiveValue::Set(material.unit);
        material_am.quantity = ActiveValue::Set(material.quantity);
        material_am.price = ActiveValue::Set(material.price);
        material_am.total = ActiveValue::Set(material.total);
        material_am.sort_order = ActiveValue::Set(material.sort_order);

        Ok(Some(material_am.update(self.db).await?))
    }

    /// Deletes a material line
    ///
    /// Returns OK regardless of the material existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, material_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::EstimateMaterial::delete_by_id(material_id)
            .exec(self.db)
            .await
    }
}
