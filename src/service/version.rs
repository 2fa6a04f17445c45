//! Immutable estimate versions.
//!
//! Creating a version copies the estimate's sections, items, views and view settings into
//! snapshot tables inside one transaction, remapping every reference onto the new snapshot
//! IDs. Nothing in the snapshot points back at a live row except the `original_*` columns,
//! so later edits of the estimate never reach a version.

use std::collections::HashMap;

use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        estimate::EstimateRepository, item::ItemRepository, section::SectionRepository,
        version::VersionRepository, version_snapshot::VersionSnapshotRepository,
        view::ViewRepository, view_setting::ViewSettingRepository,
    },
    error::Error,
    model::{db::VersionModel, projection::ProjectedEstimate, version::VersionSnapshot},
    service::{
        projection::{project_sections, ItemPricing, ItemSource, ProjectionInput, SectionSource},
        retry::RetryContext,
    },
    util::validate::optional_text,
};

/// Number of rows copied into a snapshot, per kind.
#[derive(Debug)]
struct SnapshotCounts {
    sections: usize,
    items: usize,
    views: usize,
    section_settings: usize,
    item_settings: usize,
}

/// Creates and reads immutable estimate versions
pub struct VersionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VersionService<'a> {
    /// Creates a new instance of [`VersionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Snapshots the current state of an estimate as its next version
    ///
    /// Version numbers start at 1 and increase by one per estimate. Concurrent callers racing
    /// for the same number are retried, each ends up with a distinct number.
    ///
    /// # Returns
    /// - `Ok(VersionModel)` - The committed version header
    /// - `Err(Error::NotFound)` - Estimate does not exist
    /// - `Err(Error::Conflict)` - A version number could not be allocated within the retry limit
    pub async fn create_version(
        &self,
        estimate_id: Uuid,
        label: Option<String>,
    ) -> Result<VersionModel, Error> {
        let label = optional_text(label);

        let mut ctx = RetryContext::new();
        let db = self.db.clone();

        let version = ctx
            .execute_with_retry(
                &format!("version creation for estimate ID {}", estimate_id),
                || {
                    let db = db.clone();
                    let label = label.clone();

                    Box::pin(async move {
                        let txn = db.begin().await.map_err(Error::TransactionFailed)?;

                        if EstimateRepository::new(&txn)
                            .get_by_id(estimate_id)
                            .await?
                            .is_none()
                        {
                            return Err(Error::NotFound(format!("Estimate ID {}", estimate_id)));
                        }

                        let version_repo = VersionRepository::new(&txn);
                        let version_number = version_repo.next_version_number(estimate_id).await?;
                        let version = version_repo
                            .create(estimate_id, version_number, label)
                            .await?;

                        let counts = copy_estimate(&txn, estimate_id, version.id).await?;

                        txn.commit().await.map_err(Error::TransactionFailed)?;

                        tracing::debug!(
                            "Copied {} sections, {} items, {} views, {} section settings & {} item settings into version {} of estimate ID {}",
                            counts.sections,
                            counts.items,
                            counts.views,
                            counts.section_settings,
                            counts.item_settings,
                            version.version_number,
                            estimate_id
                        );

                        Ok(version)
                    })
                },
            )
            .await?;

        tracing::info!(
            "Created version {} (ID {}) of estimate ID {}",
            version.version_number,
            version.id,
            estimate_id
        );

        Ok(version)
    }

    /// Reads every row of a version
    pub async fn read_version(&self, version_id: Uuid) -> Result<VersionSnapshot, Error> {
        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;

        let version = VersionRepository::new(&txn)
            .get_by_id(version_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Version ID {}", version_id)))?;

        let snapshot_repo = VersionSnapshotRepository::new(&txn);
        let sections = snapshot_repo.get_sections(version_id).await?;
        let items = snapshot_repo.get_items(version_id).await?;
        let views = snapshot_repo.get_views(version_id).await?;

        let view_ids: Vec<Uuid> = views.iter().map(|view| view.id).collect();
        let section_settings = snapshot_repo.get_section_settings(&view_ids).await?;
        let item_settings = snapshot_repo.get_item_settings(&view_ids).await?;

        txn.commit().await.map_err(Error::TransactionFailed)?;

        Ok(VersionSnapshot {
            version,
            sections,
            items,
            views,
            section_settings,
            item_settings,
        })
    }

    /// Gets the versions of an estimate, newest first
    pub async fn get_versions(&self, estimate_id: Uuid) -> Result<Vec<VersionModel>, Error> {
        if EstimateRepository::new(self.db)
            .get_by_id(estimate_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Estimate ID {}", estimate_id)));
        }

        Ok(VersionRepository::new(self.db)
            .get_many_by_estimate_id(estimate_id)
            .await?)
    }

    /// Deletes a version and its snapshot rows
    pub async fn delete_version(&self, version_id: Uuid) -> Result<(), Error> {
        let result = VersionRepository::new(self.db).delete(version_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("Version ID {}", version_id)));
        }

        tracing::info!("Deleted version ID {}", version_id);

        Ok(())
    }

    /// Renders a version through one of its snapshot views, using the same rules as a live
    /// projection
    ///
    /// # Returns
    /// - `Ok(ProjectedEstimate)` - `view_id` is the snapshot view ID
    /// - `Err(Error::NotFound)` - The version or view is missing, or the view belongs to
    ///   another version
    pub async fn project_version(
        &self,
        version_id: Uuid,
        version_view_id: Uuid,
    ) -> Result<ProjectedEstimate, Error> {
        let snapshot = self.read_version(version_id).await?;

        let view = snapshot
            .views
            .iter()
            .find(|view| view.id == version_view_id)
            .cloned()
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Version view ID {} of version ID {}",
                    version_view_id, version_id
                ))
            })?;

        let estimate = EstimateRepository::new(self.db)
            .get_by_id(snapshot.version.estimate_id)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("Estimate ID {}", snapshot.version.estimate_id))
            })?;

        let input = ProjectionInput {
            sections: snapshot
                .sections
                .into_iter()
                .map(SectionSource::from)
                .collect(),
            items: snapshot.items.into_iter().map(ItemSource::from).collect(),
            section_visibility: snapshot
                .section_settings
                .into_iter()
                .filter(|setting| setting.version_view_id == view.id)
                .map(|setting| (setting.version_section_id, setting.visible))
                .collect(),
            item_pricing: snapshot
                .item_settings
                .into_iter()
                .filter(|setting| setting.version_view_id == view.id)
                .map(|setting| {
                    (
                        setting.version_item_id,
                        ItemPricing {
                            price: setting.price,
                            total: setting.total,
                            visible: setting.visible,
                        },
                    )
                })
                .collect(),
        };

        let (sections, total) = project_sections(input);

        Ok(ProjectedEstimate {
            estimate_id: estimate.id,
            title: estimate.title,
            view_id: view.id,
            view_name: view.name,
            sections,
            total,
        })
    }
}

/// Copies the live rows of an estimate into the snapshot tables of `version_id`
async fn copy_estimate<C: ConnectionTrait>(
    txn: &C,
    estimate_id: Uuid,
    version_id: Uuid,
) -> Result<SnapshotCounts, Error> {
    let sections = SectionRepository::new(txn)
        .get_many_by_estimate_id(estimate_id)
        .await?;
    let items = ItemRepository::new(txn)
        .get_many_by_estimate_id(estimate_id)
        .await?;
    let views = ViewRepository::new(txn)
        .get_many_by_estimate_id(estimate_id)
        .await?;

    let view_ids: Vec<Uuid> = views.iter().map(|view| view.id).collect();
    let setting_repo = ViewSettingRepository::new(txn);
    let section_settings = setting_repo.get_sections_by_view_ids(&view_ids).await?;
    let item_settings = setting_repo.get_items_by_view_ids(&view_ids).await?;

    // Live ID -> snapshot ID
    let section_ids: HashMap<Uuid, Uuid> = sections
        .iter()
        .map(|section| (section.id, Uuid::new_v4()))
        .collect();
    let item_ids: HashMap<Uuid, Uuid> = items.iter().map(|item| (item.id, Uuid::new_v4())).collect();
    let view_id_map: HashMap<Uuid, Uuid> =
        views.iter().map(|view| (view.id, Uuid::new_v4())).collect();

    let counts = SnapshotCounts {
        sections: sections.len(),
        items: items.len(),
        views: views.len(),
        section_settings: section_settings.len(),
        item_settings: item_settings.len(),
    };

    let section_models = sections
        .into_iter()
        .map(|section| entity::version_section::ActiveModel {
            id: ActiveValue::Set(section_ids[&section.id]),
            version_id: ActiveValue::Set(version_id),
            original_section_id: ActiveValue::Set(section.id),
            name: ActiveValue::Set(section.name),
            sort_order: ActiveValue::Set(section.sort_order),
            show_customer: ActiveValue::Set(section.show_customer),
            show_master: ActiveValue::Set(section.show_master),
        })
        .collect();

    let item_models = items
        .into_iter()
        .map(|item| {
            Ok(entity::version_item::ActiveModel {
                id: ActiveValue::Set(item_ids[&item.id]),
                version_id: ActiveValue::Set(version_id),
                version_section_id: ActiveValue::Set(remap(&section_ids, item.section_id, "section")?),
                original_item_id: ActiveValue::Set(item.id),
                number: ActiveValue::Set(item.number),
                name: ActiveValue::Set(item.name),
                unit: ActiveValue::Set(item.unit),
                quantity: ActiveValue::Set(item.quantity),
                sort_order: ActiveValue::Set(item.sort_order),
                customer_price: ActiveValue::Set(item.customer_price),
                customer_total: ActiveValue::Set(item.customer_total),
                show_customer: ActiveValue::Set(item.show_customer),
                master_price: ActiveValue::Set(item.master_price),
                master_total: ActiveValue::Set(item.master_total),
                show_master: ActiveValue::Set(item.show_master),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let view_models = views
        .into_iter()
        .map(|view| entity::version_view::ActiveModel {
            id: ActiveValue::Set(view_id_map[&view.id]),
            version_id: ActiveValue::Set(version_id),
            original_view_id: ActiveValue::Set(view.id),
            name: ActiveValue::Set(view.name),
            token: ActiveValue::Set(view.token),
            password: ActiveValue::Set(view.password),
            sort_order: ActiveValue::Set(view.sort_order),
        })
        .collect();

    let section_setting_models = section_settings
        .into_iter()
        .map(|setting| {
            Ok(entity::version_view_section_setting::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                version_view_id: ActiveValue::Set(remap(&view_id_map, setting.view_id, "view")?),
                version_section_id: ActiveValue::Set(remap(
                    &section_ids,
                    setting.section_id,
                    "section",
                )?),
                visible: ActiveValue::Set(setting.visible),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let item_setting_models = item_settings
        .into_iter()
        .map(|setting| {
            Ok(entity::version_view_item_setting::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                version_view_id: ActiveValue::Set(remap(&view_id_map, setting.view_id, "view")?),
                version_item_id: ActiveValue::Set(remap(&item_ids, setting.item_id, "item")?),
                price: ActiveValue::Set(setting.price),
                total: ActiveValue::Set(setting.total),
                visible: ActiveValue::Set(setting.visible),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let snapshot_repo = VersionSnapshotRepository::new(txn);
    snapshot_repo.insert_sections(section_models).await?;
    snapshot_repo.insert_items(item_models).await?;
    snapshot_repo.insert_views(view_models).await?;
    snapshot_repo
        .insert_section_settings(section_setting_models)
        .await?;
    snapshot_repo.insert_item_settings(item_setting_models).await?;

    Ok(counts)
}

/// Looks up the snapshot ID of a live row referenced from within the same estimate
fn remap(ids: &HashMap<Uuid, Uuid>, live_id: Uuid, kind: &str) -> Result<Uuid, Error> {
    ids.get(&live_id).copied().ok_or_else(|| {
        Error::InternalError(format!(
            "{} ID {} is referenced by the estimate being copied but belongs to another estimate",
            kind, live_id
        ))
    })
}
