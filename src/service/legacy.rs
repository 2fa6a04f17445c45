//! Conversion of legacy customer/master sharing into views.
//!
//! Legacy estimates carry two fixed audiences: tokens and a master password on the estimate,
//! visibility flags on sections, and prices on items. The migration turns each estimate into
//! a "Customer" view and a "Master" view with explicit section & item settings, reusing the
//! legacy tokens so shared links keep resolving. When both audiences shared one token the link
//! keeps opening the customer view and the master view gets a new token.
//!
//! Whether to run is decided from row counts on every call: only when estimates exist and no
//! view exists at all. The whole conversion is one transaction, a failure leaves the database
//! without any views so the next startup runs it again from scratch.

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        estimate::EstimateRepository,
        item::ItemRepository,
        section::SectionRepository,
        view::ViewRepository,
        view_setting::{ItemSetting, ViewSettingRepository},
    },
    error::Error,
    model::{
        db::{EstimateModel, ViewModel},
        legacy::LegacyMigrationReport,
    },
    util::token::generate_view_token,
};

/// Name of the view created from the legacy customer audience
pub const CUSTOMER_VIEW_NAME: &str = "Customer";
/// Name of the view created from the legacy master audience
pub const MASTER_VIEW_NAME: &str = "Master";

/// Settings written for one estimate.
struct MigratedEstimate {
    views: usize,
    section_settings: u64,
    item_settings: u64,
}

/// Converts legacy customer/master sharing into views
pub struct LegacyMigrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LegacyMigrationService<'a> {
    /// Creates a new instance of [`LegacyMigrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts every legacy estimate into customer & master views
    ///
    /// # Returns
    /// - `Ok(LegacyMigrationReport)` - With `skipped` set when there was nothing to convert
    /// - `Err(Error::Conflict)` - A legacy token is already used by a view of another estimate
    /// - `Err(Error)` - Any storage failure, nothing was written
    pub async fn run(&self) -> Result<LegacyMigrationReport, Error> {
        let estimate_count = EstimateRepository::new(self.db).count().await?;
        let view_count = ViewRepository::new(self.db).count().await?;

        if estimate_count == 0 || view_count > 0 {
            tracing::info!(
                "Skipping legacy view migration ({} estimates, {} views)",
                estimate_count,
                view_count
            );

            return Ok(LegacyMigrationReport {
                skipped: true,
                ..Default::default()
            });
        }

        tracing::info!(
            "Migrating {} legacy estimates to views",
            estimate_count
        );

        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;
        let estimates = EstimateRepository::new(&txn).get_all().await?;

        let mut report = LegacyMigrationReport::default();
        for estimate in &estimates {
            let migrated = match migrate_estimate(&txn, estimate).await {
                Ok(migrated) => migrated,
                Err(e) => {
                    tracing::error!(
                        "Legacy view migration failed for estimate ID {}, rolling back: {}",
                        estimate.id,
                        e
                    );
                    return Err(e);
                }
            };

            report.estimates += 1;
            report.views += migrated.views;
            report.section_settings += migrated.section_settings;
            report.item_settings += migrated.item_settings;
        }

        txn.commit().await.map_err(Error::TransactionFailed)?;

        tracing::info!(
            "Legacy view migration created {} views, {} section settings & {} item settings for {} estimates",
            report.views,
            report.section_settings,
            report.item_settings,
            report.estimates
        );

        Ok(report)
    }
}

async fn migrate_estimate<C: ConnectionTrait>(
    txn: &C,
    estimate: &EstimateModel,
) -> Result<MigratedEstimate, Error> {
    let customer = legacy_view(
        txn,
        estimate,
        CUSTOMER_VIEW_NAME,
        estimate.customer_token.clone(),
        None,
        0,
    )
    .await?;
    let master = legacy_view(
        txn,
        estimate,
        MASTER_VIEW_NAME,
        estimate.master_token.clone(),
        estimate.master_password.clone(),
        1,
    )
    .await?;

    let sections = SectionRepository::new(txn)
        .get_many_by_estimate_id(estimate.id)
        .await?;
    let items = ItemRepository::new(txn)
        .get_many_by_estimate_id(estimate.id)
        .await?;

    let section_settings = sections
        .iter()
        .flat_map(|section| {
            [
                (customer.id, section.id, section.show_customer),
                (master.id, section.id, section.show_master),
            ]
        })
        .collect();

    let item_settings = items
        .iter()
        .flat_map(|item| {
            [
                ItemSetting {
                    view_id: customer.id,
                    item_id: item.id,
                    price: item.customer_price.unwrap_or(Decimal::ZERO),
                    total: item.customer_total.unwrap_or(Decimal::ZERO),
                    visible: item.show_customer,
                },
                ItemSetting {
                    view_id: master.id,
                    item_id: item.id,
                    price: item.master_price.unwrap_or(Decimal::ZERO),
                    total: item.master_total.unwrap_or(Decimal::ZERO),
                    visible: item.show_master,
                },
            ]
        })
        .collect();

    let setting_repo = ViewSettingRepository::new(txn);
    let section_settings = setting_repo
        .insert_sections_if_absent(section_settings)
        .await?;
    let item_settings = setting_repo.insert_items_if_absent(item_settings).await?;

    tracing::debug!(
        "Migrated estimate ID {} to views {} & {}",
        estimate.id,
        customer.id,
        master.id
    );

    Ok(MigratedEstimate {
        views: 2,
        section_settings,
        item_settings,
    })
}

/// Creates a view carrying a legacy token
///
/// A token already held by the other view of the same estimate (both legacy audiences shared
/// one link) is kept by that view and the new view gets a fresh token.
async fn legacy_view<C: ConnectionTrait>(
    txn: &C,
    estimate: &EstimateModel,
    name: &str,
    legacy_token: Option<String>,
    password: Option<String>,
    sort_order: i32,
) -> Result<ViewModel, Error> {
    let view_repo = ViewRepository::new(txn);

    let token = match legacy_token.filter(|token| !token.trim().is_empty()) {
        Some(token) => match view_repo.get_by_token(&token).await? {
            None => token,
            Some(existing) if existing.estimate_id == estimate.id => {
                tracing::warn!(
                    "Legacy {} token of estimate ID {} is shared with view {}, issuing a new token",
                    name,
                    estimate.id,
                    existing.name
                );

                generate_view_token()
            }
            Some(existing) => {
                return Err(Error::Conflict(format!(
                    "Legacy token of estimate ID {} is already used by a view of estimate ID {}",
                    estimate.id, existing.estimate_id
                )));
            }
        },
        None => generate_view_token(),
    };

    Ok(view_repo
        .create(estimate.id, name.to_string(), token, password, sort_order)
        .await?)
}
