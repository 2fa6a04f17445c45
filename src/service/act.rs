//! Saved acts and act images.
//!
//! An act freezes a selection of a view's projection: every line copies the name, quantity,
//! price & total it had when the act was saved. Later edits to the estimate or the view never
//! change a saved act.

use std::collections::HashSet;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        act_image::ActImageRepository, estimate::EstimateRepository, saved_act::SavedActRepository,
        view::ViewRepository,
    },
    error::Error,
    model::{
        act::{ActImageType, ActSelection, SaveActRequest, SavedAct},
        db::SavedActModel,
        projection::ProjectedEstimate,
    },
    service::projection::{load_estimate_view, project_live},
    util::{
        money::sum_money,
        validate::{optional_text, require_text},
    },
};

/// A line of an act before it is stored.
struct ActLine {
    section_id: Option<Uuid>,
    item_id: Option<Uuid>,
    name: String,
    unit: String,
    quantity: Decimal,
    price: Decimal,
    total: Decimal,
}

/// Saves and reads acts along with the images printed on them
pub struct ActService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActService<'a> {
    /// Creates a new instance of [`ActService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves an act built from the projection of a view
    ///
    /// Without an explicit view the estimate's first view by sort order is used. Selected
    /// sections and items must be visible in that view.
    ///
    /// # Returns
    /// - `Ok(SavedAct)` - The act with its lines in selection order
    /// - `Err(Error::ValidationFailed)` - Blank number, empty selection, a repeated ID, or a
    ///   selected row that isn't visible in the view
    /// - `Err(Error::NotFound)` - Estimate or view missing, or the estimate has no views
    pub async fn save_act(&self, request: SaveActRequest) -> Result<SavedAct, Error> {
        let number = require_text("Act number", &request.number)?;
        if request.selection.ids().is_empty() {
            return Err(Error::ValidationFailed(
                "Act selection must not be empty".to_string(),
            ));
        }
        let unique_ids: HashSet<&Uuid> = request.selection.ids().iter().collect();
        if unique_ids.len() != request.selection.ids().len() {
            return Err(Error::ValidationFailed(
                "Act selection must not repeat an ID".to_string(),
            ));
        }

        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;

        let view_id = match request.view_id {
            Some(view_id) => view_id,
            None => ViewRepository::new(&txn)
                .get_many_by_estimate_id(request.estimate_id)
                .await?
                .first()
                .map(|view| view.id)
                .ok_or_else(|| {
                    Error::NotFound(format!("Views of estimate ID {}", request.estimate_id))
                })?,
        };

        let (estimate, view) = load_estimate_view(&txn, request.estimate_id, view_id).await?;
        let projected = project_live(&txn, &estimate, &view).await?;
        let lines = select_lines(&projected, &request.selection)?;

        let act_id = Uuid::new_v4();
        let grand_total = sum_money(selected_item_totals(&projected, &request.selection));

        let act = entity::saved_act::ActiveModel {
            id: ActiveValue::Set(act_id),
            estimate_id: ActiveValue::Set(estimate.id),
            view_id: ActiveValue::Set(Some(view.id)),
            number: ActiveValue::Set(number),
            act_date: ActiveValue::Set(request.act_date),
            selection_mode: ActiveValue::Set(request.selection.mode().to_string()),
            executor_name: ActiveValue::Set(optional_text(request.executor_name)),
            customer_name: ActiveValue::Set(optional_text(request.customer_name)),
            director_name: ActiveValue::Set(optional_text(request.director_name)),
            grand_total: ActiveValue::Set(grand_total),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        let items = lines
            .into_iter()
            .zip(0..)
            .map(|(line, sort_order)| entity::saved_act_item::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                saved_act_id: ActiveValue::Set(act_id),
                section_id: ActiveValue::Set(line.section_id),
                item_id: ActiveValue::Set(line.item_id),
                name: ActiveValue::Set(line.name),
                unit: ActiveValue::Set(line.unit),
                quantity: ActiveValue::Set(line.quantity),
                price: ActiveValue::Set(line.price),
                total: ActiveValue::Set(line.total),
                sort_order: ActiveValue::Set(sort_order),
            })
            .collect();

        let act_repo = SavedActRepository::new(&txn);
        let act = act_repo.create(act, items).await?;
        let items = act_repo.get_items(act.id).await?;

        txn.commit().await.map_err(Error::TransactionFailed)?;

        tracing::info!(
            "Saved act {} (ID {}) for estimate ID {} through view ID {}",
            act.number,
            act.id,
            estimate.id,
            view.id
        );

        Ok(SavedAct { act, items })
    }

    /// Gets an act with its lines
    pub async fn get_act(&self, act_id: Uuid) -> Result<SavedAct, Error> {
        let act_repo = SavedActRepository::new(self.db);

        let act = act_repo
            .get_by_id(act_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Act ID {}", act_id)))?;
        let items = act_repo.get_items(act_id).await?;

        Ok(SavedAct { act, items })
    }

    /// Gets the act headers of an estimate, most recent first
    ///
    /// # Returns
    /// - `Ok(Vec<SavedActModel>)` - The acts, empty when none were saved
    /// - `Err(Error::NotFound)` - Estimate does not exist
    pub async fn get_acts(&self, estimate_id: Uuid) -> Result<Vec<SavedActModel>, Error> {
        self.require_estimate(estimate_id).await?;

        Ok(SavedActRepository::new(self.db)
            .get_many_by_estimate_id(estimate_id)
            .await?)
    }

    /// Deletes an act along with its lines
    pub async fn delete_act(&self, act_id: Uuid) -> Result<(), Error> {
        let result = SavedActRepository::new(self.db).delete(act_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("Act ID {}", act_id)));
        }

        Ok(())
    }

    /// Stores the logo, stamp or signature image of an estimate, replacing the previous one
    ///
    /// # Returns
    /// - `Ok(())` - Image stored as base64
    /// - `Err(Error::ValidationFailed)` - Image is empty
    /// - `Err(Error::NotFound)` - Estimate does not exist
    pub async fn set_image(
        &self,
        estimate_id: Uuid,
        image_type: ActImageType,
        image: &[u8],
    ) -> Result<(), Error> {
        if image.is_empty() {
            return Err(Error::ValidationFailed(format!(
                "{} image must not be empty",
                image_type
            )));
        }

        self.require_estimate(estimate_id).await?;

        ActImageRepository::new(self.db)
            .upsert(estimate_id, image_type, STANDARD.encode(image))
            .await?;

        Ok(())
    }

    /// Gets the decoded image of `image_type`, `None` when the estimate has none
    pub async fn get_image(
        &self,
        estimate_id: Uuid,
        image_type: ActImageType,
    ) -> Result<Option<Vec<u8>>, Error> {
        self.require_estimate(estimate_id).await?;

        let image = match ActImageRepository::new(self.db)
            .get(estimate_id, image_type)
            .await?
        {
            Some(image) => image,
            None => return Ok(None),
        };

        let decoded = STANDARD.decode(image.data.as_bytes()).map_err(|e| {
            Error::InternalError(format!(
                "Stored {} image of estimate ID {} is not valid base64: {}",
                image_type, estimate_id, e
            ))
        })?;

        Ok(Some(decoded))
    }

    /// Deletes the image of `image_type`, `NotFound` when the estimate has none
    pub async fn delete_image(&self, estimate_id: Uuid, image_type: ActImageType) -> Result<(), Error> {
        self.require_estimate(estimate_id).await?;

        let result = ActImageRepository::new(self.db)
            .delete(estimate_id, image_type)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!(
                "{} image of estimate ID {}",
                image_type, estimate_id
            )));
        }

        Ok(())
    }

    async fn require_estimate(&self, estimate_id: Uuid) -> Result<(), Error> {
        if EstimateRepository::new(self.db)
            .get_by_id(estimate_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Estimate ID {}", estimate_id)));
        }

        Ok(())
    }
}

/// Unrounded totals of every item the selection covers, a selected section covers all of its
/// visible items
///
/// Section line totals are already rounded and never feed the grand total.
fn selected_item_totals(projected: &ProjectedEstimate, selection: &ActSelection) -> Vec<Decimal> {
    projected
        .sections
        .iter()
        .flat_map(|section| {
            let whole_section = matches!(
                selection,
                ActSelection::Sections(ids) if ids.contains(&section.id)
            );

            section.items.iter().filter(move |item| match selection {
                ActSelection::Sections(_) => whole_section,
                ActSelection::Items(ids) => ids.contains(&item.id),
            })
        })
        .map(|item| item.total)
        .collect()
}

/// Builds act lines for the selected IDs, in selection order
fn select_lines(projected: &ProjectedEstimate, selection: &ActSelection) -> Result<Vec<ActLine>, Error> {
    match selection {
        ActSelection::Sections(section_ids) => section_ids
            .iter()
            .map(|section_id| {
                let section = projected
                    .sections
                    .iter()
                    .find(|section| section.id == *section_id)
                    .ok_or_else(|| {
                        Error::ValidationFailed(format!(
                            "Section ID {} is not visible in view {}",
                            section_id, projected.view_name
                        ))
                    })?;

                Ok(ActLine {
                    section_id: Some(section.id),
                    item_id: None,
                    name: section.name.clone(),
                    unit: String::new(),
                    quantity: Decimal::ONE,
                    price: section.total,
                    total: section.total,
                })
            })
            .collect(),
        ActSelection::Items(item_ids) => item_ids
            .iter()
            .map(|item_id| {
                let (section, item) = projected
                    .sections
                    .iter()
                    .flat_map(|section| section.items.iter().map(move |item| (section, item)))
                    .find(|(_, item)| item.id == *item_id)
                    .ok_or_else(|| {
                        Error::ValidationFailed(format!(
                            "Item ID {} is not visible in view {}",
                            item_id, projected.view_name
                        ))
                    })?;

                Ok(ActLine {
                    section_id: Some(section.id),
                    item_id: Some(item.id),
                    name: item.name.clone(),
                    unit: item.unit.clone(),
                    quantity: item.quantity,
                    price: item.price,
                    total: item.total,
                })
            })
            .collect(),
    }
}
