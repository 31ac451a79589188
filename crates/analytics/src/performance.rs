//! Per-type performance: velocity ranking and demand trend.
//!
//! Ties are broken by first-encountered order: when two types share the best
//! (or worst) average velocity, the one appearing first in the type
//! distribution wins. The same rule applies to the fast-moving top type.

use serde::{Deserialize, Serialize};

use jewelai_core::ValueObject;
use jewelai_inventory::{InventoryItem, LifecycleStage};

use crate::policy::{InventoryPolicy, Trend};

/// Type bucket enriched with mean sales velocity over all its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypePerformance {
    #[serde(rename = "type")]
    pub item_type: String,
    pub count: usize,
    pub value: f64,
    pub avg_velocity: f64,
}

impl ValueObject for TypePerformance {}

/// Type breakdown with demand trend, the category view of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummary {
    #[serde(rename = "type")]
    pub item_type: String,
    pub count: usize,
    pub value: f64,
    pub avg_days_in_inventory: f64,
    pub avg_velocity: f64,
    pub trend: Trend,
}

impl ValueObject for TypeSummary {}

/// Running sums for one type, borrowed from the item list.
struct TypeTotals<'a> {
    name: &'a str,
    count: usize,
    value: f64,
    velocity_sum: f64,
    days_sum: f64,
}

impl TypeTotals<'_> {
    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        sum / self.count as f64
    }
}

/// One pass over `items`, one entry per type in first-encountered order.
fn type_totals<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Vec<TypeTotals<'a>> {
    let mut totals: Vec<TypeTotals<'a>> = Vec::new();
    for item in items {
        let idx = match totals.iter().position(|t| t.name == item.item_type()) {
            Some(idx) => idx,
            None => {
                totals.push(TypeTotals {
                    name: item.item_type(),
                    count: 0,
                    value: 0.0,
                    velocity_sum: 0.0,
                    days_sum: 0.0,
                });
                totals.len() - 1
            }
        };
        let entry = &mut totals[idx];
        entry.count += 1;
        entry.value += item.final_selling_price();
        entry.velocity_sum += item.sales_velocity();
        entry.days_sum += f64::from(item.days_in_inventory());
    }
    totals
}

/// Performance record per type, in type-distribution order.
pub fn type_performance(items: &[InventoryItem]) -> Vec<TypePerformance> {
    type_totals(items)
        .into_iter()
        .map(|t| TypePerformance {
            avg_velocity: t.mean(t.velocity_sum),
            item_type: t.name.to_string(),
            count: t.count,
            value: t.value,
        })
        .collect()
}

/// Type with the highest mean velocity; `None` for an empty inventory.
pub fn top_performer(items: &[InventoryItem]) -> Option<TypePerformance> {
    pick_by_velocity(type_performance(items), |candidate, best| candidate > best)
}

/// Type with the lowest mean velocity; `None` for an empty inventory.
pub fn worst_performer(items: &[InventoryItem]) -> Option<TypePerformance> {
    pick_by_velocity(type_performance(items), |candidate, best| candidate < best)
}

fn pick_by_velocity(
    records: Vec<TypePerformance>,
    beats: impl Fn(f64, f64) -> bool,
) -> Option<TypePerformance> {
    let mut chosen: Option<TypePerformance> = None;
    for record in records {
        match &chosen {
            Some(best) if !beats(record.avg_velocity, best.avg_velocity) => {}
            _ => chosen = Some(record),
        }
    }
    chosen
}

/// Most common type (by item count) among Fast-moving items.
pub fn fast_moving_top_type(items: &[InventoryItem]) -> Option<String> {
    let fast = items
        .iter()
        .filter(|i| i.lifecycle_stage() == LifecycleStage::FastMoving);

    let mut top: Option<TypeTotals<'_>> = None;
    for totals in type_totals(fast) {
        match &top {
            Some(best) if totals.count <= best.count => {}
            _ => top = Some(totals),
        }
    }
    top.map(|t| t.name.to_string())
}

/// Per-type summary including the demand trend implied by days in inventory.
pub fn type_summaries(items: &[InventoryItem], policy: &InventoryPolicy) -> Vec<TypeSummary> {
    type_totals(items)
        .into_iter()
        .map(|t| {
            let avg_days = t.mean(t.days_sum);
            TypeSummary {
                avg_velocity: t.mean(t.velocity_sum),
                avg_days_in_inventory: avg_days,
                trend: policy.trend_for(avg_days),
                item_type: t.name.to_string(),
                count: t.count,
                value: t.value,
            }
        })
        .collect()
}
