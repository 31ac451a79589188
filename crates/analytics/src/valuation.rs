//! Valuation, shares and averages.
//!
//! All ratios return 0 for an empty denominator. These numbers end up in
//! narrative text, where `NaN` is worse than a zero.

use serde::{Deserialize, Serialize};

use jewelai_core::ValueObject;
use jewelai_inventory::{InventoryItem, LifecycleStage};

/// Sum of `finalSellingPrice` over `items`.
pub fn stock_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(InventoryItem::final_selling_price).sum()
}

/// `part / total * 100`, or 0 when `total` is 0.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

/// One-decimal rendering used for every displayed percentage (`"12.5"`).
pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.1}")
}

/// Share of `part_len` items among `total_len`, formatted to one decimal.
pub fn count_percentage(part_len: usize, total_len: usize) -> String {
    format_percentage(percentage_of(part_len as f64, total_len as f64))
}

/// Mean `daysInInventory`, rounded to the nearest whole day.
pub fn average_days(items: &[InventoryItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let total: u64 = items.iter().map(|i| u64::from(i.days_in_inventory())).sum();
    (total as f64 / items.len() as f64).round() as u32
}

pub fn average_price(items: &[InventoryItem]) -> f64 {
    mean(items.iter().map(InventoryItem::final_selling_price), items.len())
}

pub fn average_velocity(items: &[InventoryItem]) -> f64 {
    mean(items.iter().map(InventoryItem::sales_velocity), items.len())
}

fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}

/// Count and value held under one raw lifecycle tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleShare {
    pub stage: LifecycleStage,
    pub count: usize,
    pub value: f64,
    /// Percentage of total stock value.
    pub share_of_value: f64,
}

impl ValueObject for LifecycleShare {}

/// Value held under each of the four lifecycle tags, in [`LifecycleStage::ALL`] order.
///
/// Stages with no items are still listed, with zero count and value.
pub fn lifecycle_shares(items: &[InventoryItem]) -> Vec<LifecycleShare> {
    let total = stock_value(items);
    LifecycleStage::ALL
        .iter()
        .map(|&stage| {
            let (count, value) = items
                .iter()
                .filter(|i| i.lifecycle_stage() == stage)
                .fold((0usize, 0.0f64), |(c, v), i| (c + 1, v + i.final_selling_price()));
            LifecycleShare {
                stage,
                count,
                value,
                share_of_value: percentage_of(value, total),
            }
        })
        .collect()
}
