//! Budget store: async CRUD plus per-trip lookup and spending progress.
//!
//! # Responsibility
//! - Own the in-memory working set of budgets.
//! - Measure spend against a trip's budget for dashboard callers.
//!
//! # Invariants
//! - The 1:1 trip-budget assumption is NOT enforced; per-trip lookups use
//!   first-match semantics over insertion order.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::model::budget::{Budget, BudgetPatch, NewBudget, SpendingProgress};
use crate::store::latency::{self, LatencyProfile};
use crate::store::{next_record_id, EntityKind, StoreError, StoreResult};

/// In-memory budget store; cheap to clone, clones share the working set.
#[derive(Debug, Clone)]
pub struct BudgetStore {
    records: Arc<RwLock<Vec<Budget>>>,
    latency: LatencyProfile,
}

impl BudgetStore {
    /// Creates an empty store.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    /// Creates a store pre-loaded with `records`, preserving their order.
    pub fn seeded(records: Vec<Budget>, latency: LatencyProfile) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Returns a copy of every budget, in insertion order. Never fails.
    pub async fn get_all(&self) -> Vec<Budget> {
        latency::simulate(self.latency.list).await;
        self.records.read().await.clone()
    }

    /// Returns a copy of the matching budget, or `None` when absent.
    pub async fn get_by_id(&self, id: &str) -> Option<Budget> {
        latency::simulate(self.latency.lookup).await;
        self.records.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Appends a new budget and returns the stored copy.
    ///
    /// Assigns a fresh id and `created_at`. Nothing stops a second budget
    /// for the same trip; see [`BudgetStore::by_trip`].
    pub async fn create(&self, draft: NewBudget) -> Budget {
        latency::simulate(self.latency.create).await;
        let budget = Budget {
            id: next_record_id(),
            trip_id: draft.trip_id,
            total_amount: draft.total_amount,
            daily_limit: draft.daily_limit,
            category_limits: draft.category_limits,
            alert_threshold: draft.alert_threshold,
            created_at: Utc::now(),
        };
        self.records.write().await.push(budget.clone());
        budget
    }

    /// Shallow-merges `patch` into the budget with `id`.
    ///
    /// A patched `category_limits` map replaces the stored map wholesale.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no budget has `id`.
    pub async fn update(&self, id: &str, patch: BudgetPatch) -> StoreResult<Budget> {
        latency::simulate(self.latency.update).await;
        let mut records = self.records.write().await;
        let budget = records
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Budget, id))?;
        budget.apply(patch);
        Ok(budget.clone())
    }

    /// Removes the budget with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no budget has `id`.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        latency::simulate(self.latency.delete).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Budget, id))?;
        records.remove(index);
        Ok(())
    }

    /// Returns the first budget attributed to `trip_id`, or `None`.
    ///
    /// First-match semantics: when more than one budget references the same
    /// trip, later ones are silently ignored.
    pub async fn by_trip(&self, trip_id: &str) -> Option<Budget> {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .find(|b| b.trip_id == trip_id)
            .cloned()
    }

    /// Measures `total_spent` against the trip's budget.
    ///
    /// Returns `None` when the trip has no budget. Uses the same first-match
    /// lookup as [`BudgetStore::by_trip`].
    pub async fn spending_progress(
        &self,
        trip_id: &str,
        total_spent: f64,
    ) -> Option<SpendingProgress> {
        latency::simulate(self.latency.query).await;
        let records = self.records.read().await;
        let budget = records.iter().find(|b| b.trip_id == trip_id)?;
        Some(SpendingProgress::measure(budget.total_amount, total_spent))
    }
}
