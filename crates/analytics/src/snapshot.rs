//! The aggregate snapshot handed to the report builder.

use serde::{Deserialize, Serialize};

use jewelai_inventory::InventoryItem;

use crate::distribution::Distributions;
use crate::lifecycle::partition_by_lifecycle;
use crate::performance::{TypePerformance, fast_moving_top_type, top_performer, worst_performer};
use crate::valuation::{average_days, average_price, average_velocity, count_percentage, stock_value};

/// Rollup of one lifecycle bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleRollup {
    pub items: Vec<InventoryItem>,
    pub value: f64,
    /// Share of the item count, one decimal (`"12.5"`).
    pub percentage: String,
    pub avg_days: u32,
    pub avg_price: f64,
}

impl LifecycleRollup {
    pub fn of(items: Vec<InventoryItem>, total_items: usize) -> Self {
        Self {
            value: stock_value(&items),
            percentage: count_percentage(items.len(), total_items),
            avg_days: average_days(&items),
            avg_price: average_price(&items),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything a report needs, computed in one call.
///
/// Built fresh on demand and never mutated afterwards. Two snapshots of equal
/// inventories compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub total_stock_value: f64,
    pub total_items: usize,
    /// Mean days in inventory over the whole list, rounded.
    pub avg_days_in_inventory: u32,
    pub fast_moving: LifecycleRollup,
    pub slow_moving: LifecycleRollup,
    pub dead_stock: LifecycleRollup,
    /// Mean sales velocity of the fast-moving bucket.
    pub fast_moving_avg_velocity: f64,
    pub fast_moving_top_type: Option<String>,
    pub top_performing: Option<TypePerformance>,
    pub worst_performing: Option<TypePerformance>,
    pub distributions: Distributions,
}

impl ReportData {
    pub fn build(items: &[InventoryItem]) -> Self {
        let total_items = items.len();
        let partition = partition_by_lifecycle(items);
        let fast_moving_avg_velocity = average_velocity(&partition.fast_moving);

        let data = Self {
            total_stock_value: stock_value(items),
            total_items,
            avg_days_in_inventory: average_days(items),
            fast_moving: LifecycleRollup::of(partition.fast_moving, total_items),
            slow_moving: LifecycleRollup::of(partition.slow_moving, total_items),
            dead_stock: LifecycleRollup::of(partition.dead_stock, total_items),
            fast_moving_avg_velocity,
            fast_moving_top_type: fast_moving_top_type(items),
            top_performing: top_performer(items),
            worst_performing: worst_performer(items),
            distributions: Distributions::compute(items),
        };

        tracing::debug!(
            total_items,
            fast_moving = data.fast_moving.len(),
            slow_moving = data.slow_moving.len(),
            dead_stock = data.dead_stock.len(),
            "built report snapshot"
        );

        data
    }

    /// How many average-priced fast movers the dead-stock value could buy.
    pub fn reinvestment_capacity(&self) -> u64 {
        if self.fast_moving.avg_price <= 0.0 {
            return 0;
        }
        (self.dead_stock.value / self.fast_moving.avg_price).round() as u64
    }
}
