use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        estimate::EstimateRepository,
        item::ItemRepository,
        section::SectionRepository,
        view::ViewRepository,
        view_setting::{ItemSetting, ViewSettingRepository},
    },
    error::Error,
    model::db::{ViewItemSettingModel, ViewModel, ViewSectionSettingModel},
    service::retry::RetryContext,
    util::{
        token::generate_view_token,
        validate::{optional_text, require_non_negative, require_text},
    },
};

/// Manages views and their section & item settings
pub struct ViewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViewService<'a> {
    /// Creates a new instance of [`ViewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a view placed after the estimate's existing views with a fresh share token
    ///
    /// The token is regenerated on collision.
    ///
    /// # Returns
    /// - `Ok(ViewModel)` - The created view
    /// - `Err(Error::ValidationFailed)` - Blank name
    /// - `Err(Error::NotFound)` - Estimate does not exist
    /// - `Err(Error::Conflict)` - Every generated token collided
    pub async fn create_view(
        &self,
        estimate_id: Uuid,
        name: &str,
        password: Option<String>,
    ) -> Result<ViewModel, Error> {
        let name = require_text("View name", name)?;
        let password = optional_text(password);

        let mut ctx = RetryContext::new();
        let db = self.db.clone();

        let view = ctx
            .execute_with_retry(
                &format!("view creation for estimate ID {}", estimate_id),
                || {
                    let db = db.clone();
                    let name = name.clone();
                    let password = password.clone();
                    let token = generate_view_token();

                    Box::pin(async move {
                        let txn = db.begin().await.map_err(Error::TransactionFailed)?;

                        if EstimateRepository::new(&txn)
                            .get_by_id(estimate_id)
                            .await?
                            .is_none()
                        {
                            return Err(Error::NotFound(format!("Estimate ID {}", estimate_id)));
                        }

                        let view_repo = ViewRepository::new(&txn);
                        let sort_order = view_repo.next_sort_order(estimate_id).await?;
                        let view = view_repo
                            .create(estimate_id, name, token, password, sort_order)
                            .await?;

                        txn.commit().await.map_err(Error::TransactionFailed)?;

                        Ok(view)
                    })
                },
            )
            .await?;

        tracing::info!(
            "Created view {} ({}) for estimate ID {}",
            view.id,
            view.name,
            estimate_id
        );

        Ok(view)
    }

    /// Gets a view, `NotFound` when it does not exist
    pub async fn get_view(&self, view_id: Uuid) -> Result<ViewModel, Error> {
        ViewRepository::new(self.db)
            .get_by_id(view_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("View ID {}", view_id)))
    }

    /// Resolves a share token to its view
    pub async fn find_view_by_token(&self, token: &str) -> Result<ViewModel, Error> {
        ViewRepository::new(self.db)
            .get_by_token(token)
            .await?
            .ok_or_else(|| Error::NotFound("View for share token".to_string()))
    }

    /// Gets the views of an estimate in display order
    pub async fn get_views(&self, estimate_id: Uuid) -> Result<Vec<ViewModel>, Error> {
        if EstimateRepository::new(self.db)
            .get_by_id(estimate_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Estimate ID {}", estimate_id)));
        }

        Ok(ViewRepository::new(self.db)
            .get_many_by_estimate_id(estimate_id)
            .await?)
    }

    /// Renames a view, the name must not be blank
    pub async fn rename_view(&self, view_id: Uuid, name: &str) -> Result<ViewModel, Error> {
        let name = require_text("View name", name)?;

        ViewRepository::new(self.db)
            .update_name(view_id, name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("View ID {}", view_id)))
    }

    /// Sets or clears (`None` or blank) the password guarding a view
    pub async fn set_password(
        &self,
        view_id: Uuid,
        password: Option<String>,
    ) -> Result<ViewModel, Error> {
        ViewRepository::new(self.db)
            .update_password(view_id, optional_text(password))
            .await?
            .ok_or_else(|| Error::NotFound(format!("View ID {}", view_id)))
    }

    /// Deletes a view along with its settings
    pub async fn delete_view(&self, view_id: Uuid) -> Result<(), Error> {
        let result = ViewRepository::new(self.db).delete(view_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("View ID {}", view_id)));
        }

        tracing::info!("Deleted view ID {}", view_id);

        Ok(())
    }

    /// Shows or hides a section within a view
    ///
    /// Repeating the call with the same arguments leaves exactly one setting row.
    ///
    /// # Returns
    /// - `Ok(ViewSectionSettingModel)` - The stored setting
    /// - `Err(Error::NotFound)` - The view or section is missing, or they belong to different
    ///   estimates
    pub async fn set_section_visibility(
        &self,
        view_id: Uuid,
        section_id: Uuid,
        visible: bool,
    ) -> Result<ViewSectionSettingModel, Error> {
        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;

        let view = ViewRepository::new(&txn)
            .get_by_id(view_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("View ID {}", view_id)))?;

        SectionRepository::new(&txn)
            .get_by_id(section_id)
            .await?
            .filter(|section| section.estimate_id == view.estimate_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Section ID {} of estimate ID {}",
                    section_id, view.estimate_id
                ))
            })?;

        let setting = ViewSettingRepository::new(&txn)
            .upsert_section(view_id, section_id, visible)
            .await?;

        txn.commit().await.map_err(Error::TransactionFailed)?;

        Ok(setting)
    }

    /// Sets the price, total & visibility of an item within a view
    ///
    /// # Returns
    /// - `Ok(ViewItemSettingModel)` - The stored setting
    /// - `Err(Error::ValidationFailed)` - Negative price or total
    /// - `Err(Error::NotFound)` - The view or item is missing, or they belong to different
    ///   estimates
    pub async fn set_item_override(
        &self,
        view_id: Uuid,
        item_id: Uuid,
        price: Decimal,
        total: Decimal,
        visible: bool,
    ) -> Result<ViewItemSettingModel, Error> {
        let price = require_non_negative("Price", price)?;
        let total = require_non_negative("Total", total)?;

        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;

        let view = ViewRepository::new(&txn)
            .get_by_id(view_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("View ID {}", view_id)))?;

        ItemRepository::new(&txn)
            .get_by_id(item_id)
            .await?
            .filter(|item| item.estimate_id == view.estimate_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Item ID {} of estimate ID {}",
                    item_id, view.estimate_id
                ))
            })?;

        let setting = ViewSettingRepository::new(&txn)
            .upsert_item(ItemSetting {
                view_id,
                item_id,
                price,
                total,
                visible,
            })
            .await?;

        txn.commit().await.map_err(Error::TransactionFailed)?;

        Ok(setting)
    }
}
