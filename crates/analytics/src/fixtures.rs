use jewelai_inventory::{InventoryItem, ItemRecord, LifecycleStage};

pub(crate) fn item(
    sku: &str,
    item_type: &str,
    price: f64,
    days: i64,
    velocity: f64,
    stage: LifecycleStage,
) -> InventoryItem {
    styled(sku, item_type, "Gold", "Classic", "Main Store", price, days, velocity, stage)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn styled(
    sku: &str,
    item_type: &str,
    metal: &str,
    design_style: &str,
    location: &str,
    price: f64,
    days: i64,
    velocity: f64,
    stage: LifecycleStage,
) -> InventoryItem {
    InventoryItem::try_from(ItemRecord {
        sku: sku.to_string(),
        item_type: item_type.to_string(),
        metal: metal.to_string(),
        metal_purity: "22K".to_string(),
        design_style: design_style.to_string(),
        stock_location: location.to_string(),
        final_selling_price: price,
        days_in_inventory: days,
        sales_velocity: velocity,
        lifecycle_stage: stage,
    })
    .expect("fixture item must be valid")
}

pub(crate) fn stage_from_index(i: u8) -> LifecycleStage {
    LifecycleStage::ALL[usize::from(i % 4)]
}

const TYPES: [&str; 4] = ["Chain", "Bangle", "Cuff", "Charm"];
const METALS: [&str; 3] = ["Gold", "Silver", "Platinum"];
const STYLES: [&str; 3] = ["Classic", "Modern", "Temple"];
const LOCATIONS: [&str; 2] = ["Main Store", "Warehouse"];

/// Arbitrary validated inventories with unique SKUs.
pub(crate) fn arb_inventory(max_len: usize) -> impl proptest::strategy::Strategy<Value = Vec<InventoryItem>> {
    use proptest::prelude::*;

    prop::collection::vec(
        (
            0usize..TYPES.len(),
            0usize..METALS.len(),
            0usize..STYLES.len(),
            0usize..LOCATIONS.len(),
            0u32..500_000,
            0i64..400,
            0u32..80,
            any::<u8>(),
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (t, m, s, l, price, days, velocity, stage))| {
                styled(
                    &format!("SKU-{i:04}"),
                    TYPES[t],
                    METALS[m],
                    STYLES[s],
                    LOCATIONS[l],
                    f64::from(price),
                    days,
                    f64::from(velocity) / 10.0,
                    stage_from_index(stage),
                )
            })
            .collect()
    })
}
