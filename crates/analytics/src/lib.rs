//! `jewelai-analytics` — the derived-metrics layer.
//!
//! Every function here is pure: it takes an already-validated item slice and
//! returns freshly allocated results. Nothing is cached, so two surfaces that
//! call the same function on the same inventory always report the same numbers.

pub mod distribution;
pub mod kpi;
pub mod lifecycle;
pub mod performance;
pub mod policy;
pub mod snapshot;
pub mod valuation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use distribution::{
    Dimension, DistributionBucket, Distributions, distribution_by, distribution_by_key,
};
pub use kpi::KpiSummary;
pub use lifecycle::{LifecycleBucket, LifecyclePartition, partition_by_lifecycle};
pub use performance::{
    TypePerformance, TypeSummary, fast_moving_top_type, top_performer, type_performance,
    type_summaries, worst_performer,
};
pub use policy::{AgeBand, InventoryPolicy, Trend};
pub use snapshot::{LifecycleRollup, ReportData};
pub use valuation::{
    LifecycleShare, average_days, average_price, average_velocity, count_percentage,
    format_percentage, lifecycle_shares, percentage_of, stock_value,
};
