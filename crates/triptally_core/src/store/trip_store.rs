//! Trip store: async CRUD plus status and date-range queries.
//!
//! # Responsibility
//! - Own the in-memory working set of trips.
//! - Emulate a remote trip service for UI callers without a backend.
//!
//! # Invariants
//! - `create` assigns id/`created_at` and snapshots `status = Active`.
//! - All results are owned copies; insertion order is preserved.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::model::trip::{NewTrip, Trip, TripPatch, TripStatus};
use crate::store::latency::{self, LatencyProfile};
use crate::store::{next_record_id, EntityKind, StoreError, StoreResult};

/// In-memory trip store; cheap to clone, clones share the working set.
#[derive(Debug, Clone)]
pub struct TripStore {
    records: Arc<RwLock<Vec<Trip>>>,
    latency: LatencyProfile,
}

impl TripStore {
    /// Creates an empty store.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    /// Creates a store pre-loaded with `records`, preserving their order.
    pub fn seeded(records: Vec<Trip>, latency: LatencyProfile) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Returns a copy of every trip, in insertion order. Never fails.
    pub async fn get_all(&self) -> Vec<Trip> {
        latency::simulate(self.latency.list).await;
        self.records.read().await.clone()
    }

    /// Returns a copy of the matching trip, or `None` when absent.
    pub async fn get_by_id(&self, id: &str) -> Option<Trip> {
        latency::simulate(self.latency.lookup).await;
        self.records.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// Appends a new trip and returns the stored copy.
    ///
    /// # Contract
    /// - Assigns a fresh id and `created_at`.
    /// - Stores `status = Active` regardless of the date range; callers
    ///   wanting a date-accurate value use [`TripStatus::derive`].
    /// - Caller-supplied fields are trusted verbatim.
    pub async fn create(&self, draft: NewTrip) -> Trip {
        latency::simulate(self.latency.create).await;
        let trip = Trip {
            id: next_record_id(),
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            budget: draft.budget,
            currency: draft.currency,
            status: TripStatus::Active,
            created_at: Utc::now(),
        };
        self.records.write().await.push(trip.clone());
        trip
    }

    /// Shallow-merges `patch` into the trip with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no trip has `id`; the working set is
    ///   left unchanged.
    pub async fn update(&self, id: &str, patch: TripPatch) -> StoreResult<Trip> {
        latency::simulate(self.latency.update).await;
        let mut records = self.records.write().await;
        let trip = records
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Trip, id))?;
        trip.apply(patch);
        Ok(trip.clone())
    }

    /// Removes the trip with `id`.
    ///
    /// Dependent expenses, budgets and receipts are NOT removed; callers
    /// that want cascade semantics must delete them explicitly.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no trip has `id`.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        latency::simulate(self.latency.delete).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Trip, id))?;
        records.remove(index);
        Ok(())
    }

    /// Returns trips whose stored status is `Active`.
    pub async fn active(&self) -> Vec<Trip> {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|t| t.status == TripStatus::Active)
            .cloned()
            .collect()
    }

    /// Returns trips whose date range falls entirely inside `[start, end]`.
    pub async fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Trip> {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|t| t.start_date >= start && t.end_date <= end)
            .cloned()
            .collect()
    }
}
