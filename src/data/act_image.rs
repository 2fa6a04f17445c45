use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::model::{act::ActImageType, db::ActImageModel};

/// Repository for the `act_image` table
pub struct ActImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActImageRepository<'a, C> {
    /// Creates a new instance of [`ActImageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the image of `image_type` for an estimate, replacing any previous one
    ///
    /// `data` is the base64 encoded image.
    pub async fn upsert(
        &self,
        estimate_id: Uuid,
        image_type: ActImageType,
        data: String,
    ) -> Result<ActImageModel, DbErr> {
        let image = entity::act_image::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            estimate_id: ActiveValue::Set(estimate_id),
            image_type: ActiveValue::Set(image_type.as_str().to_string()),
            data: ActiveValue::Set(data),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::ActImage::insert(image)
            .on_conflict(
                OnConflict::columns([
                    entity::act_image::Column::EstimateId,
                    entity::act_image::Column::ImageType,
                ])
                .update_columns([
                    entity::act_image::Column::Data,
                    entity::act_image::Column::CreatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get(estimate_id, image_type).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "{} image for estimate ID {}",
                image_type, estimate_id
            ))
        })
    }

    /// Gets the image of `image_type` for an estimate
    pub async fn get(
        &self,
        estimate_id: Uuid,
        image_type: ActImageType,
    ) -> Result<Option<ActImageModel>, DbErr> {
        entity::prelude::ActImage::find()
            .filter(entity::act_image::Column::EstimateId.eq(estimate_id))
            .filter(entity::act_image::Column::ImageType.eq(image_type.as_str()))
            .one(self.db)
            .await
    }

    /// Gets every stored image of an estimate
    pub async fn get_many_by_estimate_id(&self, estimate_id: Uuid) -> Result<Vec<ActImageModel>, DbErr> {
        entity::prelude::ActImage::find()
            .filter(entity::act_image::Column::EstimateId.eq(estimate_id))
            .order_by_asc(entity::act_image::Column::ImageType)
            .all(self.db)
            .await
    }

    /// Returns OK regardless of the image existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(
        &self,
        estimate_id: Uuid,
        image_type: ActImageType,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::ActImage::delete_many()
            .filter(entity::act_image::Column::EstimateId.eq(estimate_id))
            .filter(entity::act_image::Column::ImageType.eq(image_type.as_str()))
            .exec(self.db)
            .await
    }
}
