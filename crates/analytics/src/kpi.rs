//! Dashboard KPI cards.

use serde::{Deserialize, Serialize};

use jewelai_inventory::InventoryItem;

use crate::lifecycle::partition_by_lifecycle;
use crate::valuation::{average_days, stock_value};

/// Headline figures shown on the dashboard cards.
///
/// `ageing_stock` counts the whole slow-moving bucket (Slow-moving and Ageing
/// Stock tags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_stock_value: f64,
    pub total_items: usize,
    pub fast_moving_items: usize,
    pub ageing_stock: usize,
    pub dead_stock: usize,
    pub avg_days_in_inventory: u32,
}

impl KpiSummary {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let partition = partition_by_lifecycle(items);
        Self {
            total_stock_value: stock_value(items),
            total_items: items.len(),
            fast_moving_items: partition.fast_moving.len(),
            ageing_stock: partition.slow_moving.len(),
            dead_stock: partition.dead_stock.len(),
            avg_days_in_inventory: average_days(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;
    use jewelai_inventory::LifecycleStage;

    #[test]
    fn counts_each_bucket() {
        let items = vec![
            item("1", "Chain", 1000.0, 4, 5.0, LifecycleStage::FastMoving),
            item("2", "Chain", 500.0, 100, 1.0, LifecycleStage::SlowMoving),
            item("3", "Cuff", 250.0, 130, 0.5, LifecycleStage::AgeingStock),
            item("4", "Cuff", 250.0, 210, 0.0, LifecycleStage::DeadStock),
        ];
        let kpi = KpiSummary::compute(&items);
        assert_eq!(kpi.total_stock_value, 2000.0);
        assert_eq!(kpi.total_items, 4);
        assert_eq!(kpi.fast_moving_items, 1);
        assert_eq!(kpi.ageing_stock, 2);
        assert_eq!(kpi.dead_stock, 1);
        assert_eq!(kpi.avg_days_in_inventory, 111);
    }

    #[test]
    fn empty_inventory_is_all_zero() {
        let kpi = KpiSummary::compute(&[]);
        assert_eq!(
            kpi,
            KpiSummary {
                total_stock_value: 0.0,
                total_items: 0,
                fast_moving_items: 0,
                ageing_stock: 0,
                dead_stock: 0,
                avg_days_in_inventory: 0,
            }
        );
    }
}
