use serde::{Deserialize, Serialize};

use jewelai_core::{DomainError, Entity, Sku};

/// Sales-movement classification attached to every item by the dataset.
///
/// The tag is precomputed upstream; the analytics layer only groups by it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    #[serde(rename = "Fast-moving")]
    FastMoving,
    #[serde(rename = "Slow-moving")]
    SlowMoving,
    #[serde(rename = "Ageing Stock")]
    AgeingStock,
    #[serde(rename = "Dead Stock")]
    DeadStock,
}

impl LifecycleStage {
    /// All stages, in the order the dashboard lists them.
    pub const ALL: [LifecycleStage; 4] = [
        LifecycleStage::FastMoving,
        LifecycleStage::SlowMoving,
        LifecycleStage::AgeingStock,
        LifecycleStage::DeadStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStage::FastMoving => "Fast-moving",
            LifecycleStage::SlowMoving => "Slow-moving",
            LifecycleStage::AgeingStock => "Ageing Stock",
            LifecycleStage::DeadStock => "Dead Stock",
        }
    }
}

impl core::fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of one inventory row, exactly as it appears in the JSON fixture.
///
/// Every field is required. Numeric fields are not defaulted: a missing price
/// would silently shrink every valuation, so deserialization fails instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub sku: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub metal: String,
    pub metal_purity: String,
    pub design_style: String,
    pub stock_location: String,
    pub final_selling_price: f64,
    pub days_in_inventory: i64,
    pub sales_velocity: f64,
    pub lifecycle_stage: LifecycleStage,
}

/// A validated, read-only inventory item.
///
/// Construct through `TryFrom<ItemRecord>` (or deserialize, which goes through
/// the same path). Once built, the numeric fields are known to be finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub struct InventoryItem {
    sku: Sku,
    item_type: String,
    metal: String,
    metal_purity: String,
    design_style: String,
    stock_location: String,
    final_selling_price: f64,
    days_in_inventory: u32,
    sales_velocity: f64,
    lifecycle_stage: LifecycleStage,
}

impl InventoryItem {
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    pub fn metal(&self) -> &str {
        &self.metal
    }

    pub fn metal_purity(&self) -> &str {
        &self.metal_purity
    }

    pub fn design_style(&self) -> &str {
        &self.design_style
    }

    pub fn stock_location(&self) -> &str {
        &self.stock_location
    }

    pub fn final_selling_price(&self) -> f64 {
        self.final_selling_price
    }

    pub fn days_in_inventory(&self) -> u32 {
        self.days_in_inventory
    }

    pub fn sales_velocity(&self) -> f64 {
        self.sales_velocity
    }

    pub fn lifecycle_stage(&self) -> LifecycleStage {
        self.lifecycle_stage
    }
}

impl Entity for InventoryItem {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl TryFrom<ItemRecord> for InventoryItem {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let sku = Sku::parse(record.sku)?;

        if !record.final_selling_price.is_finite() || record.final_selling_price < 0.0 {
            return Err(DomainError::validation(format!(
                "item {sku}: finalSellingPrice must be a finite non-negative number (got {})",
                record.final_selling_price
            )));
        }

        if !record.sales_velocity.is_finite() || record.sales_velocity < 0.0 {
            return Err(DomainError::validation(format!(
                "item {sku}: salesVelocity must be a finite non-negative number (got {})",
                record.sales_velocity
            )));
        }

        let days_in_inventory = u32::try_from(record.days_in_inventory).map_err(|_| {
            DomainError::validation(format!(
                "item {sku}: daysInInventory must be a non-negative integer (got {})",
                record.days_in_inventory
            ))
        })?;

        Ok(Self {
            sku,
            item_type: record.item_type,
            metal: record.metal,
            metal_purity: record.metal_purity,
            design_style: record.design_style,
            stock_location: record.stock_location,
            final_selling_price: record.final_selling_price,
            days_in_inventory,
            sales_velocity: record.sales_velocity,
            lifecycle_stage: record.lifecycle_stage,
        })
    }
}

impl From<InventoryItem> for ItemRecord {
    fn from(item: InventoryItem) -> Self {
        Self {
            sku: item.sku.into(),
            item_type: item.item_type,
            metal: item.metal,
            metal_purity: item.metal_purity,
            design_style: item.design_style,
            stock_location: item.stock_location,
            final_selling_price: item.final_selling_price,
            days_in_inventory: i64::from(item.days_in_inventory),
            sales_velocity: item.sales_velocity,
            lifecycle_stage: item.lifecycle_stage,
        }
    }
}
