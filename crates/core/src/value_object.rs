//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two buckets named `"Gold"` with the same
/// count and value are the same bucket. They are immutable once computed; to
/// "change" one, compute a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: a `DistributionBucket { name: "Gold", count: 2, value: 300.0 }`
/// - **Entity**: an `InventoryItem` identified by its SKU, whatever its price
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied
/// into reports, compared in tests and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
