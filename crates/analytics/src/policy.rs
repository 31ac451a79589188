//! Business thresholds used by classification helpers and narrative text.

use serde::{Deserialize, Serialize};

use jewelai_core::{DomainError, DomainResult};

/// Named policy constants.
///
/// Loaded from a JSON file (every field optional, camelCase) or taken from
/// [`InventoryPolicy::default`]. Always validate before use; `from_json` does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InventoryPolicy {
    /// Units/month at or above which an item counts as fast-moving.
    pub fast_moving_velocity_threshold: f64,
    /// Days after which slow movers get discount treatment.
    pub slow_moving_days_threshold: u32,
    /// Days after which unsold stock should move to another location or channel.
    pub transfer_days_threshold: u32,
    /// Days after which stock is treated as dead and cleared.
    pub dead_stock_days_threshold: u32,
    /// Average days in inventory below which a type is trending up.
    pub rising_trend_days: f64,
    /// Average days in inventory above which a type is trending down.
    pub falling_trend_days: f64,
    /// Maximum rows in the per-lifecycle item tables of a report.
    pub table_row_limit: usize,
}

impl Default for InventoryPolicy {
    fn default() -> Self {
        Self {
            fast_moving_velocity_threshold: 2.0,
            slow_moving_days_threshold: 90,
            transfer_days_threshold: 120,
            dead_stock_days_threshold: 180,
            rising_trend_days: 7.0,
            falling_trend_days: 30.0,
            table_row_limit: 10,
        }
    }
}

impl InventoryPolicy {
    /// Parse and validate a policy document.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let policy: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid inventory policy: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.fast_moving_velocity_threshold.is_finite()
            && self.fast_moving_velocity_threshold > 0.0)
        {
            return Err(DomainError::validation(
                "fastMovingVelocityThreshold must be a finite positive number",
            ));
        }

        if self.slow_moving_days_threshold == 0 {
            return Err(DomainError::validation("slowMovingDaysThreshold must be positive"));
        }

        if self.slow_moving_days_threshold >= self.transfer_days_threshold
            || self.transfer_days_threshold > self.dead_stock_days_threshold
        {
            return Err(DomainError::invariant(format!(
                "day thresholds must satisfy slow < transfer <= dead (got {} / {} / {})",
                self.slow_moving_days_threshold,
                self.transfer_days_threshold,
                self.dead_stock_days_threshold
            )));
        }

        if !(self.rising_trend_days.is_finite()
            && self.falling_trend_days.is_finite()
            && self.rising_trend_days >= 0.0
            && self.rising_trend_days < self.falling_trend_days)
        {
            return Err(DomainError::invariant(
                "trend thresholds must be finite with risingTrendDays < fallingTrendDays",
            ));
        }

        if self.table_row_limit == 0 {
            return Err(DomainError::validation("tableRowLimit must be positive"));
        }

        Ok(())
    }

    /// Badge for how long an item has sat in stock.
    pub fn age_band(&self, days_in_inventory: u32) -> AgeBand {
        if days_in_inventory > self.dead_stock_days_threshold {
            AgeBand::Critical
        } else if days_in_inventory > self.slow_moving_days_threshold {
            AgeBand::Ageing
        } else {
            AgeBand::Fresh
        }
    }

    /// Demand trend implied by an average days-in-inventory figure.
    pub fn trend_for(&self, avg_days_in_inventory: f64) -> Trend {
        if avg_days_in_inventory < self.rising_trend_days {
            Trend::Rising
        } else if avg_days_in_inventory > self.falling_trend_days {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    Fresh,
    Ageing,
    Critical,
}

impl AgeBand {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Fresh => "Fresh",
            AgeBand::Ageing => "Ageing",
            AgeBand::Critical => "Critical",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
            Trend::Falling => "falling",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        InventoryPolicy::default().validate().unwrap();
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let policy = InventoryPolicy::from_json(r#"{"deadStockDaysThreshold": 240}"#).unwrap();
        assert_eq!(policy.dead_stock_days_threshold, 240);
        assert_eq!(policy.slow_moving_days_threshold, 90);
        assert_eq!(policy.table_row_limit, 10);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = InventoryPolicy::from_json(r#"{"deadStockDays": 240}"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("deadStockDays")));
    }

    #[test]
    fn unordered_day_thresholds_are_rejected() {
        let policy = InventoryPolicy {
            slow_moving_days_threshold: 200,
            ..InventoryPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn zero_velocity_threshold_is_rejected() {
        let policy = InventoryPolicy {
            fast_moving_velocity_threshold: 0.0,
            ..InventoryPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn age_bands_use_strict_thresholds() {
        let policy = InventoryPolicy::default();
        assert_eq!(policy.age_band(90), AgeBand::Fresh);
        assert_eq!(policy.age_band(91), AgeBand::Ageing);
        assert_eq!(policy.age_band(180), AgeBand::Ageing);
        assert_eq!(policy.age_band(181), AgeBand::Critical);
    }

    #[test]
    fn trend_boundaries() {
        let policy = InventoryPolicy::default();
        assert_eq!(policy.trend_for(6.9), Trend::Rising);
        assert_eq!(policy.trend_for(7.0), Trend::Stable);
        assert_eq!(policy.trend_for(30.0), Trend::Stable);
        assert_eq!(policy.trend_for(30.5), Trend::Falling);
    }
}
