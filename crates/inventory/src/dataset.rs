//! Dataset acceptance: turn raw JSON into a validated item list.
//!
//! The whole dataset is rejected on the first bad row. Partial inventories
//! would produce totals that look plausible and are wrong.

use std::collections::HashSet;

use serde_json::Value as JsonValue;

use jewelai_core::{DomainError, DomainResult};

use crate::item::{InventoryItem, ItemRecord};

/// Parse a JSON document holding an array of inventory rows.
pub fn parse_inventory(json: &str) -> DomainResult<Vec<InventoryItem>> {
    let value: JsonValue = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("inventory dataset is not valid JSON: {e}")))?;

    let rows = match value {
        JsonValue::Array(rows) => rows,
        other => {
            return Err(DomainError::validation(format!(
                "inventory dataset must be a JSON array, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let record: ItemRecord = serde_json::from_value(row)
            .map_err(|e| DomainError::validation(format!("item #{index}: {e}")))?;
        records.push(record);
    }

    validate_records(records)
}

/// Validate already-deserialized rows and enforce SKU uniqueness.
pub fn validate_records(records: Vec<ItemRecord>) -> DomainResult<Vec<InventoryItem>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut items = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let item = InventoryItem::try_from(record).map_err(|e| match e {
            DomainError::Validation(msg) => DomainError::validation(format!("item #{index}: {msg}")),
            DomainError::InvalidId(msg) => DomainError::invalid_id(format!("item #{index}: {msg}")),
            other => other,
        })?;

        if !seen.insert(item.sku().clone()) {
            return Err(DomainError::conflict(format!(
                "item #{index}: duplicate sku {}",
                item.sku()
            )));
        }
        items.push(item);
    }

    Ok(items)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
