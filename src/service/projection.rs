//! View projection.
//!
//! A projection renders an estimate for one audience. A section is shown unless the view has
//! a section setting hiding it. An item is shown only when the view has an item setting
//! marking it visible, its price & total come from that setting. A hidden section hides all
//! of its items regardless of their own settings. Totals sum the unrounded item totals and
//! round once.
//!
//! The same rules render live estimates and version snapshots, both are converted into
//! [`ProjectionInput`] first.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        estimate::EstimateRepository, item::ItemRepository, section::SectionRepository,
        view::ViewRepository, view_setting::ViewSettingRepository,
    },
    error::Error,
    model::{
        db::{
            EstimateModel, ItemModel, SectionModel, VersionItemModel, VersionSectionModel,
            ViewModel,
        },
        projection::{ProjectedEstimate, ProjectedItem, ProjectedSection},
    },
    util::money::sum_money,
};

pub(crate) struct SectionSource {
    pub id: Uuid,
    pub name: String,
    pub sort_order: i32,
}

pub(crate) struct ItemSource {
    pub id: Uuid,
    pub section_id: Uuid,
    pub number: String,
    pub name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub sort_order: i32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ItemPricing {
    pub price: Decimal,
    pub total: Decimal,
    pub visible: bool,
}

/// Rows of one estimate (live or snapshot) plus the settings of the view being rendered.
#[derive(Default)]
pub(crate) struct ProjectionInput {
    pub sections: Vec<SectionSource>,
    pub items: Vec<ItemSource>,
    /// Section ID to visibility, absent sections are visible
    pub section_visibility: HashMap<Uuid, bool>,
    /// Item ID to pricing, absent items are hidden
    pub item_pricing: HashMap<Uuid, ItemPricing>,
}

impl From<SectionModel> for SectionSource {
    fn from(section: SectionModel) -> Self {
        Self {
            id: section.id,
            name: section.name,
            sort_order: section.sort_order,
        }
    }
}

impl From<VersionSectionModel> for SectionSource {
    fn from(section: VersionSectionModel) -> Self {
        Self {
            id: section.id,
            name: section.name,
            sort_order: section.sort_order,
        }
    }
}

impl From<ItemModel> for ItemSource {
    fn from(item: ItemModel) -> Self {
        Self {
            id: item.id,
            section_id: item.section_id,
            number: item.number,
            name: item.name,
            unit: item.unit,
            quantity: item.quantity,
            sort_order: item.sort_order,
        }
    }
}

impl From<VersionItemModel> for ItemSource {
    fn from(item: VersionItemModel) -> Self {
        Self {
            id: item.id,
            section_id: item.version_section_id,
            number: item.number,
            name: item.name,
            unit: item.unit,
            quantity: item.quantity,
            sort_order: item.sort_order,
        }
    }
}

/// Applies visibility & pricing, returning the visible sections in display order and the
/// grand total.
pub(crate) fn project_sections(input: ProjectionInput) -> (Vec<ProjectedSection>, Decimal) {
    let ProjectionInput {
        mut sections,
        items,
        section_visibility,
        item_pricing,
    } = input;

    sections.sort_by_key(|section| section.sort_order);

    let mut items_by_section: HashMap<Uuid, Vec<ItemSource>> = HashMap::new();
    for item in items {
        items_by_section.entry(item.section_id).or_default().push(item);
    }

    let mut projected = Vec::new();
    let mut visible_totals = Vec::new();

    for section in sections {
        if !section_visibility.get(&section.id).copied().unwrap_or(true) {
            continue;
        }

        let mut section_items = items_by_section.remove(&section.id).unwrap_or_default();
        section_items.sort_by_key(|item| item.sort_order);

        let items: Vec<ProjectedItem> = section_items
            .into_iter()
            .filter_map(|item| {
                let pricing = item_pricing.get(&item.id).filter(|p| p.visible)?;

                Some(ProjectedItem {
                    id: item.id,
                    number: item.number,
                    name: item.name,
                    unit: item.unit,
                    quantity: item.quantity,
                    sort_order: item.sort_order,
                    price: pricing.price,
                    total: pricing.total,
                })
            })
            .collect();

        visible_totals.extend(items.iter().map(|item| item.total));

        projected.push(ProjectedSection {
            id: section.id,
            total: sum_money(items.iter().map(|item| item.total)),
            name: section.name,
            sort_order: section.sort_order,
            items,
        });
    }

    (projected, sum_money(visible_totals))
}

/// Projects a live estimate through one of its views using `db` for every read.
///
/// Callers pass a transaction so all reads observe the same state.
pub(crate) async fn project_live<C: ConnectionTrait>(
    db: &C,
    estimate: &EstimateModel,
    view: &ViewModel,
) -> Result<ProjectedEstimate, Error> {
    let sections = SectionRepository::new(db)
        .get_many_by_estimate_id(estimate.id)
        .await?;
    let items = ItemRepository::new(db)
        .get_many_by_estimate_id(estimate.id)
        .await?;

    let setting_repo = ViewSettingRepository::new(db);
    let section_settings = setting_repo.get_sections_by_view_ids(&[view.id]).await?;
    let item_settings = setting_repo.get_items_by_view_ids(&[view.id]).await?;

    let input = ProjectionInput {
        sections: sections.into_iter().map(SectionSource::from).collect(),
        items: items.into_iter().map(ItemSource::from).collect(),
        section_visibility: section_settings
            .into_iter()
            .map(|setting| (setting.section_id, setting.visible))
            .collect(),
        item_pricing: item_settings
            .into_iter()
            .map(|setting| {
                (
                    setting.item_id,
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
        title: estimate.title.clone(),
        view_id: view.id,
        view_name: view.name.clone(),
        sections,
        total,
    })
}

/// Loads an estimate and one of its views, failing with [`Error::NotFound`] when either is
/// missing or the view belongs to another estimate.
pub(crate) async fn load_estimate_view<C: ConnectionTrait>(
    db: &C,
    estimate_id: Uuid,
    view_id: Uuid,
) -> Result<(EstimateModel, ViewModel), Error> {
    let estimate = EstimateRepository::new(db)
        .get_by_id(estimate_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Estimate ID {}", estimate_id)))?;

    let view = ViewRepository::new(db)
        .get_by_id(view_id)
        .await?
        .filter(|view| view.estimate_id == estimate_id)
        .ok_or_else(|| {
            Error::NotFound(format!("View ID {} of estimate ID {}", view_id, estimate_id))
        })?;

    Ok((estimate, view))
}

/// Renders estimates through a view
pub struct ProjectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectionService<'a> {
    /// Creates a new instance of [`ProjectionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders an estimate as seen through one of its views
    ///
    /// All rows are read inside one transaction.
    ///
    /// # Returns
    /// - `Ok(ProjectedEstimate)` - Visible sections in order with their visible items
    /// - `Err(Error::NotFound)` - The estimate or view is missing, or the view belongs to a
    ///   different estimate
    pub async fn project_estimate(
        &self,
        estimate_id: Uuid,
        view_id: Uuid,
    ) -> Result<ProjectedEstimate, Error> {
        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;

        let (estimate, view) = load_estimate_view(&txn, estimate_id, view_id).await?;
        let projected = project_live(&txn, &estimate, &view).await?;

        txn.commit().await.map_err(Error::TransactionFailed)?;

        Ok(projected)
    }

    /// Renders the estimate behind a share token
    pub async fn project_by_token(&self, token: &str) -> Result<ProjectedEstimate, Error> {
        let txn = self.db.begin().await.map_err(Error::TransactionFailed)?;

        let view = ViewRepository::new(&txn)
            .get_by_token(token)
            .await?
            .ok_or_else(|| Error::NotFound("View for share token".to_string()))?;
        let (estimate, view) = load_estimate_view(&txn, view.estimate_id, view.id).await?;
        let projected = project_live(&txn, &estimate, &view).await?;

        txn.commit().await.map_err(Error::TransactionFailed)?;

        Ok(projected)
    }
}
