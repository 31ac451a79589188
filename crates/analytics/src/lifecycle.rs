//! Three-way lifecycle partition.

use serde::{Deserialize, Serialize};

use jewelai_inventory::{InventoryItem, LifecycleStage};

/// Reporting bucket. Slow-moving and Ageing Stock tags share one bucket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleBucket {
    FastMoving,
    SlowMoving,
    DeadStock,
}

impl LifecycleBucket {
    pub fn of(stage: LifecycleStage) -> Self {
        match stage {
            LifecycleStage::FastMoving => LifecycleBucket::FastMoving,
            LifecycleStage::SlowMoving | LifecycleStage::AgeingStock => LifecycleBucket::SlowMoving,
            LifecycleStage::DeadStock => LifecycleBucket::DeadStock,
        }
    }
}

/// Items split by [`LifecycleBucket`], each list in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecyclePartition {
    pub fast_moving: Vec<InventoryItem>,
    pub slow_moving: Vec<InventoryItem>,
    pub dead_stock: Vec<InventoryItem>,
}

impl LifecyclePartition {
    pub fn bucket(&self, bucket: LifecycleBucket) -> &[InventoryItem] {
        match bucket {
            LifecycleBucket::FastMoving => &self.fast_moving,
            LifecycleBucket::SlowMoving => &self.slow_moving,
            LifecycleBucket::DeadStock => &self.dead_stock,
        }
    }

    pub fn len(&self) -> usize {
        self.fast_moving.len() + self.slow_moving.len() + self.dead_stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition_by_lifecycle(items: &[InventoryItem]) -> LifecyclePartition {
    let mut partition = LifecyclePartition::default();
    for item in items {
        let target = match LifecycleBucket::of(item.lifecycle_stage()) {
            LifecycleBucket::FastMoving => &mut partition.fast_moving,
            LifecycleBucket::SlowMoving => &mut partition.slow_moving,
            LifecycleBucket::DeadStock => &mut partition.dead_stock,
        };
        target.push(item.clone());
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{arb_inventory, item};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn slow_and_ageing_share_a_bucket() {
        let items = vec![
            item("A", "Chain", 100.0, 100, 0.5, LifecycleStage::SlowMoving),
            item("B", "Chain", 100.0, 130, 0.3, LifecycleStage::AgeingStock),
            item("C", "Chain", 100.0, 5, 4.0, LifecycleStage::FastMoving),
        ];
        let partition = partition_by_lifecycle(&items);

        let slow: Vec<&str> = partition.slow_moving.iter().map(|i| i.sku().as_str()).collect();
        assert_eq!(slow, vec!["A", "B"]);
        assert_eq!(partition.fast_moving.len(), 1);
        assert!(partition.dead_stock.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        let partition = partition_by_lifecycle(&[]);
        assert!(partition.is_empty());
        assert!(partition.bucket(LifecycleBucket::DeadStock).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every item lands in exactly one bucket.
        #[test]
        fn partition_is_complete_and_disjoint(items in arb_inventory(60)) {
            let partition = partition_by_lifecycle(&items);
            prop_assert_eq!(partition.len(), items.len());

            let mut seen = HashSet::new();
            for bucket in [
                LifecycleBucket::FastMoving,
                LifecycleBucket::SlowMoving,
                LifecycleBucket::DeadStock,
            ] {
                for i in partition.bucket(bucket) {
                    prop_assert_eq!(LifecycleBucket::of(i.lifecycle_stage()), bucket);
                    prop_assert!(seen.insert(i.sku().clone()));
                }
            }
        }
    }
}
