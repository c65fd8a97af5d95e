//! Budget domain model and spending-progress math.
//!
//! # Responsibility
//! - Define per-trip spending limits (total, daily, per-category).
//! - Compute percentage-of-budget progress for dashboard callers.
//!
//! # Invariants
//! - At most one budget per trip is expected but not enforced; lookups use
//!   first-match semantics (see `BudgetStore::by_trip`).
//! - `category_limits` is replaced wholesale on update, never deep-merged.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::expense::ExpenseCategory;
use crate::model::RecordId;

/// Percentage of total budget at which progress turns `Warning`.
const WARNING_THRESHOLD_PCT: f64 = 75.0;
/// Percentage of total budget at which progress turns `Danger`.
const DANGER_THRESHOLD_PCT: f64 = 90.0;

/// Spending limits associated with one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: RecordId,
    /// Weak reference to a `Trip`; not validated.
    pub trip_id: RecordId,
    pub total_amount: f64,
    pub daily_limit: f64,
    pub category_limits: HashMap<ExpenseCategory, f64>,
    /// Percentage of `total_amount` at which alert UI should fire.
    pub alert_threshold: f64,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Shallow-merges `patch` into this record. Absent fields are untouched.
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(trip_id) = patch.trip_id {
            self.trip_id = trip_id;
        }
        if let Some(total_amount) = patch.total_amount {
            self.total_amount = total_amount;
        }
        if let Some(daily_limit) = patch.daily_limit {
            self.daily_limit = daily_limit;
        }
        if let Some(category_limits) = patch.category_limits {
            self.category_limits = category_limits;
        }
        if let Some(alert_threshold) = patch.alert_threshold {
            self.alert_threshold = alert_threshold;
        }
    }
}

/// Caller-supplied fields for `BudgetStore::create`.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub trip_id: RecordId,
    pub total_amount: f64,
    pub daily_limit: f64,
    #[serde(default)]
    pub category_limits: HashMap<ExpenseCategory, f64>,
    pub alert_threshold: f64,
}

/// Partial update for `BudgetStore::update`.
///
/// A `Some(category_limits)` replaces the whole map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetPatch {
    pub trip_id: Option<RecordId>,
    pub total_amount: Option<f64>,
    pub daily_limit: Option<f64>,
    pub category_limits: Option<HashMap<ExpenseCategory, f64>>,
    pub alert_threshold: Option<f64>,
}

/// Traffic-light bucket for spending progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Good,
    Warning,
    Danger,
}

/// Percentage-of-budget snapshot for one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingProgress {
    /// Spent share of `total_amount`, capped at 100.
    pub percentage: f64,
    pub status: BudgetHealth,
    /// Unspent remainder, floored at 0.
    pub remaining: f64,
    pub is_over_budget: bool,
}

impl SpendingProgress {
    /// Measures `total_spent` against a budget's `total_amount`.
    ///
    /// # Contract
    /// - `percentage` is capped at 100 even when over budget.
    /// - `status` is `Danger` at >= 90%, `Warning` at >= 75%, else `Good`,
    ///   measured before the cap.
    /// - `remaining` never goes negative; overspend is reported via
    ///   `is_over_budget` instead.
    pub fn measure(total_amount: f64, total_spent: f64) -> Self {
        let raw_percentage = (total_spent / total_amount) * 100.0;
        let status = if raw_percentage >= DANGER_THRESHOLD_PCT {
            BudgetHealth::Danger
        } else if raw_percentage >= WARNING_THRESHOLD_PCT {
            BudgetHealth::Warning
        } else {
            BudgetHealth::Good
        };

        Self {
            percentage: raw_percentage.min(100.0),
            status,
            remaining: (total_amount - total_spent).max(0.0),
            is_over_budget: total_spent > total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BudgetHealth, SpendingProgress};

    #[test]
    fn measure_buckets_follow_thresholds() {
        assert_eq!(
            SpendingProgress::measure(1000.0, 500.0).status,
            BudgetHealth::Good
        );
        assert_eq!(
            SpendingProgress::measure(1000.0, 750.0).status,
            BudgetHealth::Warning
        );
        assert_eq!(
            SpendingProgress::measure(1000.0, 900.0).status,
            BudgetHealth::Danger
        );
    }

    #[test]
    fn measure_caps_percentage_and_floors_remaining() {
        let progress = SpendingProgress::measure(1000.0, 1250.0);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(progress.is_over_budget);
        assert_eq!(progress.status, BudgetHealth::Danger);
    }

    #[test]
    fn measure_at_exact_budget_is_not_over() {
        let progress = SpendingProgress::measure(800.0, 800.0);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(!progress.is_over_budget);
    }
}
