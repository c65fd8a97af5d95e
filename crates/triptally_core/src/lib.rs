//! Core data-access layer for TripTally.
//!
//! One in-memory mock store per entity (trip, expense, budget, receipt),
//! each emulating a remote persistence service: async CRUD and simple
//! queries over an owned working set, configurable artificial latency, and
//! owned copies on every result. Stores never reference each other's data;
//! composing them (and cascading deletes, when wanted) is the caller's job.

pub mod fixtures;
pub mod logging;
pub mod model;
pub mod ocr;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::budget::{Budget, BudgetHealth, BudgetPatch, NewBudget, SpendingProgress};
pub use model::expense::{Expense, ExpenseCategory, ExpensePatch, NewExpense};
pub use model::receipt::{NewReceipt, Receipt, ReceiptPatch};
pub use model::trip::{NewTrip, Trip, TripPatch, TripStatus};
pub use model::RecordId;
pub use ocr::OcrExtraction;
pub use store::budget_store::BudgetStore;
pub use store::expense_store::{CategorySpend, ExpenseStore, MonthlySpend, VendorSpend};
pub use store::latency::LatencyProfile;
pub use store::receipt_store::ReceiptStore;
pub use store::trip_store::TripStore;
pub use store::{EntityKind, StoreError, StoreResult};

use log::info;

/// Context object bundling one store per entity.
///
/// Constructed explicitly and passed to callers instead of living as an
/// import-time singleton; clones share the same working sets.
#[derive(Debug, Clone)]
pub struct Stores {
    pub trips: TripStore,
    pub expenses: ExpenseStore,
    pub budgets: BudgetStore,
    pub receipts: ReceiptStore,
}

impl Stores {
    /// Creates four empty stores sharing one latency profile.
    pub fn empty(latency: LatencyProfile) -> Self {
        Self {
            trips: TripStore::new(latency),
            expenses: ExpenseStore::new(latency),
            budgets: BudgetStore::new(latency),
            receipts: ReceiptStore::new(latency),
        }
    }

    /// Creates four stores seeded with the fixture datasets.
    ///
    /// # Side effects
    /// - Emits a `fixtures_loaded` logging event with per-store counts.
    pub fn with_fixtures(latency: LatencyProfile) -> Self {
        let trips = fixtures::trips();
        let expenses = fixtures::expenses();
        let budgets = fixtures::budgets();
        let receipts = fixtures::receipts();
        info!(
            "event=fixtures_loaded module=core status=ok trips={} expenses={} budgets={} receipts={}",
            trips.len(),
            expenses.len(),
            budgets.len(),
            receipts.len()
        );
        Self {
            trips: TripStore::seeded(trips, latency),
            expenses: ExpenseStore::seeded(expenses, latency),
            budgets: BudgetStore::seeded(budgets, latency),
            receipts: ReceiptStore::seeded(receipts, latency),
        }
    }
}

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
