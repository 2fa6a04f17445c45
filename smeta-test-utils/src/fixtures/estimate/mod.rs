//! Estimate fixture utilities.
//!
//! Inserts estimates together with everything hanging off them. Items can be created either
//! the current way (no embedded pricing) or the legacy way, carrying the customer and master
//! price columns that the startup migration converts into views.

pub mod factory;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{
    constant::{TEST_ITEM_UNIT, TEST_OWNER_ID},
    error::TestError,
    model::{
        EstimateModel, ItemModel, MaterialModel, SectionModel, ViewItemSettingModel, ViewModel,
        ViewSectionSettingModel,
    },
    TestSetup,
};

/// Per-audience pricing stored directly on legacy items.
#[derive(Clone, Debug, Default)]
pub struct LegacyPricing {
    pub customer_price: Option<Decimal>,
    pub customer_total: Option<Decimal>,
    pub show_customer: bool,
    pub master_price: Option<Decimal>,
    pub master_total: Option<Decimal>,
    pub show_master: bool,
}

impl LegacyPricing {
    /// Pricing visible to both audiences.
    pub fn visible(customer_total: i64, master_total: i64) -> Self {
        Self {
            customer_price: Some(Decimal::from(customer_total)),
            customer_total: Some(Decimal::from(customer_total)),
            show_customer: true,
            master_price: Some(Decimal::from(master_total)),
            master_total: Some(Decimal::from(master_total)),
            show_master: true,
        }
    }
}

impl TestSetup {
    pub fn estimate<'a>(&'a mut self) -> EstimateFixtures<'a> {
        EstimateFixtures { setup: self }
    }
}

pub struct EstimateFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> EstimateFixtures<'a> {
    pub async fn insert_estimate(&self, title: &str) -> Result<EstimateModel, TestError> {
        self.insert_legacy_estimate(title, None, None, None).await
    }

    pub async fn insert_legacy_estimate(
        &self,
        title: &str,
        customer_token: Option<&str>,
        master_token: Option<&str>,
        master_password: Option<&str>,
    ) -> Result<EstimateModel, TestError> {
        Ok(
            entity::prelude::Estimate::insert(entity::estimate::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                owner_id: ActiveValue::Set(TEST_OWNER_ID),
                title: ActiveValue::Set(title.to_string()),
                customer_token: ActiveValue::Set(customer_token.map(str::to_string)),
                master_token: ActiveValue::Set(master_token.map(str::to_string)),
                master_password: ActiveValue::Set(master_password.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                sheet_url: ActiveValue::Set(None),
                column_mapping: ActiveValue::Set(serde_json::json!({})),
                last_synced_at: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_section(
        &self,
        estimate_id: Uuid,
        name: &str,
        sort_order: i32,
    ) -> Result<SectionModel, TestError> {
        self.insert_legacy_section(estimate_id, name, sort_order, true, true)
            .await
    }

    pub async fn insert_legacy_section(
        &self,
        estimate_id: Uuid,
        name: &str,
        sort_order: i32,
        show_customer: bool,
        show_master: bool,
    ) -> Result<SectionModel, TestError> {
        Ok(
            entity::prelude::EstimateSection::insert(entity::estimate_section::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                estimate_id: ActiveValue::Set(estimate_id),
                name: ActiveValue::Set(name.to_string()),
                sort_order: ActiveValue::Set(sort_order),
                show_customer: ActiveValue::Set(show_customer),
                show_master: ActiveValue::Set(show_master),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts an item without legacy pricing, prices come from view settings.
    pub async fn insert_item(
        &self,
        section: &SectionModel,
        name: &str,
        quantity: i64,
        sort_order: i32,
    ) -> Result<ItemModel, TestError> {
        let pricing = LegacyPricing {
            show_customer: true,
            show_master: true,
            ..Default::default()
        };

        self.insert_legacy_item(section, name, quantity, sort_order, pricing)
            .await
    }

    pub async fn insert_legacy_item(
        &self,
        section: &SectionModel,
        name: &str,
        quantity: i64,
        sort_order: i32,
        pricing: LegacyPricing,
    ) -> Result<ItemModel, TestError> {
        Ok(
            entity::prelude::EstimateItem::insert(entity::estimate_item::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                section_id: ActiveValue::Set(section.id),
                estimate_id: ActiveValue::Set(section.estimate_id),
                number: ActiveValue::Set(format!("{}", sort_order + 1)),
                name: ActiveValue::Set(name.to_string()),
                unit: ActiveValue::Set(TEST_ITEM_UNIT.to_string()),
                quantity: ActiveValue::Set(Decimal::from(quantity)),
                sort_order: ActiveValue::Set(sort_order),
                customer_price: ActiveValue::Set(pricing.customer_price),
                customer_total: ActiveValue::Set(pricing.customer_total),
                show_customer: ActiveValue::Set(pricing.show_customer),
                master_price: ActiveValue::Set(pricing.master_price),
                master_total: ActiveValue::Set(pricing.master_total),
                show_master: ActiveValue::Set(pricing.show_master),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_material(
        &self,
        estimate_id: Uuid,
        name: &str,
        total: i64,
    ) -> Result<MaterialModel, TestError> {
        Ok(
            entity::prelude::EstimateMaterial::insert(entity::estimate_material::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                estimate_id: ActiveValue::Set(estimate_id),
                name: ActiveValue::Set(name.to_string()),
                unit: ActiveValue::Set("pcs".to_string()),
                quantity: ActiveValue::Set(Decimal::ONE),
                price: ActiveValue::Set(Decimal::from(total)),
                total: ActiveValue::Set(Decimal::from(total)),
                sort_order: ActiveValue::Set(0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_view(
        &self,
        estimate_id: Uuid,
        name: &str,
        token: &str,
        sort_order: i32,
    ) -> Result<ViewModel, TestError> {
        Ok(
            entity::prelude::EstimateView::insert(entity::estimate_view::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                estimate_id: ActiveValue::Set(estimate_id),
                name: ActiveValue::Set(name.to_string()),
                token: ActiveValue::Set(token.to_string()),
                password: ActiveValue::Set(None),
                sort_order: ActiveValue::Set(sort_order),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_section_setting(
        &self,
        view_id: Uuid,
        section_id: Uuid,
        visible: bool,
    ) -> Result<ViewSectionSettingModel, TestError> {
        Ok(entity::prelude::ViewSectionSetting::insert(
            entity::view_section_setting::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                view_id: ActiveValue::Set(view_id),
                section_id: ActiveValue::Set(section_id),
                visible: ActiveValue::Set(visible),
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_item_setting(
        &self,
        view_id: Uuid,
        item_id: Uuid,
        price: i64,
        total: i64,
        visible: bool,
    ) -> Result<ViewItemSettingModel, TestError> {
        Ok(
            entity::prelude::ViewItemSetting::insert(entity::view_item_setting::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                view_id: ActiveValue::Set(view_id),
                item_id: ActiveValue::Set(item_id),
                price: ActiveValue::Set(Decimal::from(price)),
                total: ActiveValue::Set(Decimal::from(total)),
                visible: ActiveValue::Set(visible),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts an estimate with one section of two items and a single view pricing both
    /// items at `100`.
    pub async fn insert_priced_estimate(
        &self,
    ) -> Result<(EstimateModel, SectionModel, Vec<ItemModel>, ViewModel), TestError> {
        let estimate = self.insert_estimate("Priced estimate").await?;
        let section = self.insert_section(estimate.id, "Walls", 0).await?;
        let plaster = self.insert_item(&section, "Plaster", 10, 0).await?;
        let paint = self.insert_item(&section, "Paint", 5, 1).await?;
        let view = self
            .insert_view(estimate.id, "Customer", "priced-estimate-token", 0)
            .await?;

        for item in [&plaster, &paint] {
            self.insert_item_setting(view.id, item.id, 10, 100, true)
                .await?;
        }

        Ok((estimate, section, vec![plaster, paint], view))
    }
}
