//! Breakdowns of count and value by a categorical attribute.

use serde::{Deserialize, Serialize};

use jewelai_core::ValueObject;
use jewelai_inventory::InventoryItem;

/// Attribute an inventory can be broken down by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Type,
    Metal,
    DesignStyle,
    Location,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Type,
        Dimension::Metal,
        Dimension::DesignStyle,
        Dimension::Location,
    ];

    pub fn key<'a>(&self, item: &'a InventoryItem) -> &'a str {
        match self {
            Dimension::Type => item.item_type(),
            Dimension::Metal => item.metal(),
            Dimension::DesignStyle => item.design_style(),
            Dimension::Location => item.stock_location(),
        }
    }

    /// Column heading used when the breakdown is tabulated.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Type => "Type",
            Dimension::Metal => "Metal",
            Dimension::DesignStyle => "Design Style",
            Dimension::Location => "Location",
        }
    }
}

/// Aggregate of all items sharing one attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub name: String,
    pub count: usize,
    pub value: f64,
}

impl ValueObject for DistributionBucket {}

/// One bucket per distinct key, in first-encountered order.
pub fn distribution_by(items: &[InventoryItem], dimension: Dimension) -> Vec<DistributionBucket> {
    distribution_by_key(items, |item| dimension.key(item))
}

/// Group by an arbitrary key selector, keeping first-encountered order.
pub fn distribution_by_key<'a, F>(items: &'a [InventoryItem], key: F) -> Vec<DistributionBucket>
where
    F: Fn(&'a InventoryItem) -> &'a str,
{
    // Distinct keys per dimension are few; a linear scan keeps insertion order
    // without a second index.
    let mut buckets: Vec<DistributionBucket> = Vec::new();
    for item in items {
        let name = key(item);
        match buckets.iter_mut().find(|b| b.name == name) {
            Some(bucket) => {
                bucket.count += 1;
                bucket.value += item.final_selling_price();
            }
            None => buckets.push(DistributionBucket {
                name: name.to_string(),
                count: 1,
                value: item.final_selling_price(),
            }),
        }
    }
    buckets
}

/// The four breakdowns the dashboard and report show side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distributions {
    pub by_type: Vec<DistributionBucket>,
    pub by_metal: Vec<DistributionBucket>,
    pub by_design_style: Vec<DistributionBucket>,
    pub by_location: Vec<DistributionBucket>,
}

impl Distributions {
    pub fn compute(items: &[InventoryItem]) -> Self {
        Self {
            by_type: distribution_by(items, Dimension::Type),
            by_metal: distribution_by(items, Dimension::Metal),
            by_design_style: distribution_by(items, Dimension::DesignStyle),
            by_location: distribution_by(items, Dimension::Location),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &[DistributionBucket] {
        match dimension {
            Dimension::Type => &self.by_type,
            Dimension::Metal => &self.by_metal,
            Dimension::DesignStyle => &self.by_design_style,
            Dimension::Location => &self.by_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{arb_inventory, styled};
    use crate::valuation::stock_value;
    use jewelai_inventory::LifecycleStage;
    use proptest::prelude::*;

    #[test]
    fn metal_breakdown_keeps_first_encountered_order() {
        let items = vec![
            styled("1", "Chain", "Gold", "Classic", "Main", 100.0, 1, 1.0, LifecycleStage::FastMoving),
            styled("2", "Chain", "Gold", "Classic", "Main", 200.0, 1, 1.0, LifecycleStage::FastMoving),
            styled("3", "Chain", "Silver", "Classic", "Main", 50.0, 1, 1.0, LifecycleStage::FastMoving),
        ];
        let buckets = distribution_by(&items, Dimension::Metal);
        assert_eq!(
            buckets,
            vec![
                DistributionBucket { name: "Gold".into(), count: 2, value: 300.0 },
                DistributionBucket { name: "Silver".into(), count: 1, value: 50.0 },
            ]
        );
    }

    #[test]
    fn later_first_occurrence_sorts_after() {
        let items = vec![
            styled("1", "Cuff", "Silver", "Modern", "Main", 10.0, 1, 1.0, LifecycleStage::DeadStock),
            styled("2", "Chain", "Gold", "Modern", "Main", 20.0, 1, 1.0, LifecycleStage::DeadStock),
            styled("3", "Cuff", "Gold", "Modern", "Main", 30.0, 1, 1.0, LifecycleStage::DeadStock),
        ];
        let names: Vec<String> = distribution_by(&items, Dimension::Type)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Cuff", "Chain"]);
    }

    #[test]
    fn empty_input_has_no_buckets() {
        let d = Distributions::compute(&[]);
        for dim in Dimension::ALL {
            assert!(d.get(dim).is_empty());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: per dimension, bucket counts and values add back up to the inventory.
        #[test]
        fn buckets_conserve_count_and_value(items in arb_inventory(80)) {
            let total = stock_value(&items);
            let distributions = Distributions::compute(&items);

            for dim in Dimension::ALL {
                let buckets = distributions.get(dim);
                let count: usize = buckets.iter().map(|b| b.count).sum();
                let value: f64 = buckets.iter().map(|b| b.value).sum();
                prop_assert_eq!(count, items.len());
                prop_assert!((value - total).abs() <= 1e-6 * total.max(1.0));

                let mut names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
                names.sort_unstable();
                names.dedup();
                prop_assert_eq!(names.len(), buckets.len());
            }
        }
    }
}
