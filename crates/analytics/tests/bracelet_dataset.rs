//! End-to-end checks over the bundled bracelet fixture: parse, aggregate and
//! cross-check that every surface reports the same numbers.

use jewelai_analytics::{
    Dimension, KpiSummary, ReportData, distribution_by, lifecycle_shares, type_summaries,
    InventoryPolicy, Trend,
};
use jewelai_inventory::parse_inventory;

const DATASET: &str = include_str!("../../../data/bracelets.json");

#[test]
fn snapshot_matches_hand_computed_figures() {
    let items = parse_inventory(DATASET).unwrap();
    let data = ReportData::build(&items);

    assert_eq!(data.total_items, 12);
    assert_eq!(data.total_stock_value, 760_800.0);

    assert_eq!(data.fast_moving.len(), 5);
    assert_eq!(data.fast_moving.value, 233_900.0);
    assert_eq!(data.fast_moving.percentage, "41.7");
    assert_eq!(data.fast_moving.avg_price, 46_780.0);

    assert_eq!(data.slow_moving.len(), 4);
    assert_eq!(data.slow_moving.value, 358_600.0);
    assert_eq!(data.slow_moving.percentage, "33.3");
    assert_eq!(data.slow_moving.avg_days, 121);

    assert_eq!(data.dead_stock.len(), 3);
    assert_eq!(data.dead_stock.value, 168_300.0);
    assert_eq!(data.dead_stock.percentage, "25.0");
    assert_eq!(data.dead_stock.avg_days, 218);

    assert_eq!(data.avg_days_in_inventory, 103);
    assert!((data.fast_moving_avg_velocity - 3.74).abs() < 1e-9);
    assert_eq!(data.fast_moving_top_type.as_deref(), Some("Chain"));
    assert_eq!(data.top_performing.as_ref().unwrap().item_type, "Chain");
    assert_eq!(data.worst_performing.as_ref().unwrap().item_type, "Kada");
    assert_eq!(data.reinvestment_capacity(), 4);
}

#[test]
fn kpi_summary_agrees_with_snapshot() {
    let items = parse_inventory(DATASET).unwrap();
    let data = ReportData::build(&items);
    let kpi = KpiSummary::compute(&items);

    assert_eq!(kpi.total_stock_value, data.total_stock_value);
    assert_eq!(kpi.total_items, data.total_items);
    assert_eq!(kpi.fast_moving_items, data.fast_moving.len());
    assert_eq!(kpi.ageing_stock, data.slow_moving.len());
    assert_eq!(kpi.dead_stock, data.dead_stock.len());
    assert_eq!(kpi.avg_days_in_inventory, data.avg_days_in_inventory);
}

#[test]
fn standalone_distributions_match_snapshot() {
    let items = parse_inventory(DATASET).unwrap();
    let data = ReportData::build(&items);

    for dim in Dimension::ALL {
        assert_eq!(distribution_by(&items, dim), data.distributions.get(dim));
    }

    let metals: Vec<&str> = data
        .distributions
        .by_metal
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(metals, vec!["Gold", "Silver", "Platinum"]);
}

#[test]
fn lifecycle_shares_cover_total_value() {
    let items = parse_inventory(DATASET).unwrap();
    let shares = lifecycle_shares(&items);
    let value: f64 = shares.iter().map(|s| s.value).sum();
    assert_eq!(value, 760_800.0);
}

#[test]
fn kada_trends_down() {
    let items = parse_inventory(DATASET).unwrap();
    let summaries = type_summaries(&items, &InventoryPolicy::default());
    let kada = summaries.iter().find(|s| s.item_type == "Kada").unwrap();
    assert_eq!(kada.trend, Trend::Falling);
    assert_eq!(kada.count, 1);
}

#[test]
fn snapshot_serializes_with_camel_case_keys() {
    let items = parse_inventory(DATASET).unwrap();
    let json = serde_json::to_value(ReportData::build(&items)).unwrap();
    assert_eq!(json["totalStockValue"], 760_800.0);
    assert_eq!(json["deadStock"]["percentage"], "25.0");
    assert_eq!(json["distributions"]["byType"][0]["name"], "Chain");
    assert_eq!(json["fastMoving"]["items"][0]["lifecycleStage"], "Fast-moving");
}
