use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        estimate::EstimateRepository, item::ItemRepository, material::MaterialRepository,
        section::SectionRepository,
    },
    error::Error,
    model::{
        db::{EstimateModel, ItemModel, MaterialModel, SectionModel},
        estimate::{EstimateDto, ItemDto, MaterialDto, SectionDto},
    },
    util::validate::{optional_text, require_non_negative, require_text},
};

/// Edits estimates and the sections, items & material lines they own
pub struct EstimateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EstimateService<'a> {
    /// Creates a new instance of [`EstimateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an estimate for an owner
    pub async fn create_estimate(
        &self,
        owner_id: Uuid,
        estimate: EstimateDto,
    ) -> Result<EstimateModel, Error> {
        let estimate = validate_estimate(estimate)?;
        let estimate = EstimateRepository::new(self.db)
            .create(owner_id, estimate)
            .await?;

        tracing::info!("Created estimate ID {} for owner {}", estimate.id, owner_id);

        Ok(estimate)
    }

    /// Gets an estimate, `NotFound` when it does not exist
    pub async fn get_estimate(&self, estimate_id: Uuid) -> Result<EstimateModel, Error> {
        EstimateRepository::new(self.db)
            .get_by_id(estimate_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Estimate ID {}", estimate_id)))
    }

    /// Gets the estimates of an owner
    pub async fn get_estimates(&self, owner_id: Uuid) -> Result<Vec<EstimateModel>, Error> {
        Ok(EstimateRepository::new(self.db)
            .get_many_by_owner_id(owner_id)
            .await?)
    }

    /// Replaces the editable fields of an estimate
    pub async fn update_estimate(
        &self,
        estimate_id: Uuid,
        estimate: EstimateDto,
    ) -> Result<EstimateModel, Error> {
        let estimate = validate_estimate(estimate)?;

        EstimateRepository::new(self.db)
            .update(estimate_id, estimate)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Estimate ID {}", estimate_id)))
    }

    /// Records that the estimate was just re-imported from its spreadsheet
    pub async fn mark_synced(&self, estimate_id: Uuid) -> Result<EstimateModel, Error> {
        EstimateRepository::new(self.db)
            .mark_synced(estimate_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Estimate ID {}", estimate_id)))
    }

    /// Deletes an estimate and, through cascading foreign keys, every row it owns
    pub async fn delete_estimate(&self, estimate_id: Uuid) -> Result<(), Error> {
        let result = EstimateRepository::new(self.db).delete(estimate_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("Estimate ID {}", estimate_id)));
        }

        tracing::info!("Deleted estimate ID {}", estimate_id);

        Ok(())
    }

    /// Adds a section to an estimate
    pub async fn add_section(
        &self,
        estimate_id: Uuid,
        section: SectionDto,
    ) -> Result<SectionModel, Error> {
        let section = SectionDto {
            name: require_text("Section name", &section.name)?,
            ..section
        };
        self.get_estimate(estimate_id).await?;

        Ok(SectionRepository::new(self.db)
            .create(estimate_id, section)
            .await?)
    }

    /// Gets the sections of an estimate in display order
    pub async fn get_sections(&self, estimate_id: Uuid) -> Result<Vec<SectionModel>, Error> {
        self.get_estimate(estimate_id).await?;

        Ok(SectionRepository::new(self.db)
            .get_many_by_estimate_id(estimate_id)
            .await?)
    }

    /// Renames or reorders a section
    pub async fn update_section(
        &self,
        section_id: Uuid,
        section: SectionDto,
    ) -> Result<SectionModel, Error> {
        let section = SectionDto {
            name: require_text("Section name", &section.name)?,
            ..section
        };

        SectionRepository::new(self.db)
            .update(section_id, section)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Section ID {}", section_id)))
    }

    /// Deletes a section along with its items
    pub async fn delete_section(&self, section_id: Uuid) -> Result<(), Error> {
        let result = SectionRepository::new(self.db).delete(section_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("Section ID {}", section_id)));
        }

        Ok(())
    }

    /// Adds an item to a section, the item joins the section's estimate
    pub async fn add_item(&self, section_id: Uuid, item: ItemDto) -> Result<ItemModel, Error> {
        let item = validate_item(item)?;
        let section = SectionRepository::new(self.db)
            .get_by_id(section_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Section ID {}", section_id)))?;

        Ok(ItemRepository::new(self.db).create(&section, item).await?)
    }

    /// Gets the items of a section in display order
    pub async fn get_items(&self, section_id: Uuid) -> Result<Vec<ItemModel>, Error> {
        Ok(ItemRepository::new(self.db)
            .get_many_by_section_id(section_id)
            .await?)
    }

    /// Replaces the editable fields of an item
    pub async fn update_item(&self, item_id: Uuid, item: ItemDto) -> Result<ItemModel, Error> {
        let item = validate_item(item)?;

        ItemRepository::new(self.db)
            .update(item_id, item)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Item ID {}", item_id)))
    }

    /// Deletes an item along with its view settings
    pub async fn delete_item(&self, item_id: Uuid) -> Result<(), Error> {
        let result = ItemRepository::new(self.db).delete(item_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("Item ID {}", item_id)));
        }

        Ok(())
    }

    /// Adds a material line to an estimate
    pub async fn add_material(
        &self,
        estimate_id: Uuid,
        material: MaterialDto,
    ) -> Result<MaterialModel, Error> {
        let material = validate_material(material)?;
        self.get_estimate(estimate_id).await?;

        Ok(MaterialRepository::new(self.db)
            .create(estimate_id, material)
            .await?)
    }

    /// Gets the material lines of an estimate in display order
    pub async fn get_materials(&self, estimate_id: Uuid) -> Result<Vec<MaterialModel>, Error> {
        self.get_estimate(estimate_id).await?;

        Ok(MaterialRepository::new(self.db)
            .get_many_by_estimate_id(estimate_id)
            .await?)
    }

    /// Replaces the fields of a material line
    pub async fn update_material(
        &self,
        material_id: Uuid,
        material: MaterialDto,
    ) -> Result<MaterialModel, Error> {
        let material = validate_material(material)?;

        MaterialRepository::new(self.db)
            .update(material_id, material)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Material ID {}", material_id)))
    }

    /// Deletes a material line
    pub async fn delete_material(&self, material_id: Uuid) -> Result<(), Error> {
        let result = MaterialRepository::new(self.db).delete(material_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!("Material ID {}", material_id)));
        }

        Ok(())
    }
}

fn validate_estimate(estimate: EstimateDto) -> Result<EstimateDto, Error> {
    if !estimate.column_mapping.is_object() {
        return Err(Error::ValidationFailed(
            "Column mapping must be a JSON object".to_string(),
        ));
    }

    Ok(EstimateDto {
        title: require_text("Estimate title", &estimate.title)?,
        sheet_url: optional_text(estimate.sheet_url),
        column_mapping: estimate.column_mapping,
    })
}

fn validate_item(item: ItemDto) -> Result<ItemDto, Error> {
    Ok(ItemDto {
        name: require_text("Item name", &item.name)?,
        number: item.number.trim().to_string(),
        unit: item.unit.trim().to_string(),
        quantity: require_non_negative("Quantity", item.quantity)?,
        sort_order: item.sort_order,
    })
}

fn validate_material(material: MaterialDto) -> Result<MaterialDto, Error> {
    Ok(MaterialDto {
        name: require_text("Material name", &material.name)?,
        unit: material.unit.trim().to_string(),
        quantity: require_non_negative("Quantity", material.quantity)?,
        price: require_non_negative("Price", material.price)?,
        total: require_non_negative("Total", material.total)?,
        sort_order: material.sort_order,
    })
}
