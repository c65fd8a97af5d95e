//! Expense store: async CRUD, trip/category filters and report analytics.
//!
//! # Responsibility
//! - Own the in-memory working set of expenses.
//! - Provide the filter/reduce queries dashboards and reports are built on.
//!
//! # Invariants
//! - `update` refreshes `updated_at` after every successful merge.
//! - Analytics never mutate the working set; they fold over copies.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::model::expense::{Expense, ExpenseCategory, ExpensePatch, NewExpense};
use crate::store::latency::{self, LatencyProfile};
use crate::store::{next_record_id, EntityKind, StoreError, StoreResult};

/// One month's spend, keyed `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpend {
    pub month: String,
    pub amount: f64,
}

/// Total spend at one merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSpend {
    pub vendor: String,
    pub amount: f64,
}

/// Total spend in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: ExpenseCategory,
    pub amount: f64,
}

/// In-memory expense store; cheap to clone, clones share the working set.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    records: Arc<RwLock<Vec<Expense>>>,
    latency: LatencyProfile,
}

impl ExpenseStore {
    /// Creates an empty store.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    /// Creates a store pre-loaded with `records`, preserving their order.
    pub fn seeded(records: Vec<Expense>, latency: LatencyProfile) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Returns a copy of every expense, in insertion order. Never fails.
    pub async fn get_all(&self) -> Vec<Expense> {
        latency::simulate(self.latency.list).await;
        self.records.read().await.clone()
    }

    /// Returns a copy of the matching expense, or `None` when absent.
    pub async fn get_by_id(&self, id: &str) -> Option<Expense> {
        latency::simulate(self.latency.lookup).await;
        self.records.read().await.iter().find(|e| e.id == id).cloned()
    }

    /// Appends a new expense and returns the stored copy.
    ///
    /// Assigns a fresh id and sets both timestamps to now. Caller-supplied
    /// fields (including the weak `trip_id`) are trusted verbatim.
    pub async fn create(&self, draft: NewExpense) -> Expense {
        latency::simulate(self.latency.create).await;
        let now = Utc::now();
        let expense = Expense {
            id: next_record_id(),
            trip_id: draft.trip_id,
            merchant_name: draft.merchant_name,
            amount: draft.amount,
            currency: draft.currency,
            category: draft.category,
            date: draft.date,
            notes: draft.notes,
            receipt_url: draft.receipt_url,
            is_compliant: draft.is_compliant,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(expense.clone());
        expense
    }

    /// Shallow-merges `patch` into the expense with `id` and refreshes
    /// `updated_at`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no expense has `id`.
    pub async fn update(&self, id: &str, patch: ExpensePatch) -> StoreResult<Expense> {
        latency::simulate(self.latency.update).await;
        let mut records = self.records.write().await;
        let expense = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Expense, id))?;
        expense.apply(patch);
        expense.updated_at = Utc::now();
        Ok(expense.clone())
    }

    /// Removes the expense with `id`. Receipts referencing it are untouched.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no expense has `id`.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        latency::simulate(self.latency.delete).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Expense, id))?;
        records.remove(index);
        Ok(())
    }

    /// Returns all expenses attributed to `trip_id`, in insertion order.
    pub async fn by_trip(&self, trip_id: &str) -> Vec<Expense> {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect()
    }

    /// Returns all expenses in `category`, in insertion order.
    pub async fn by_category(&self, category: ExpenseCategory) -> Vec<Expense> {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Sums the amounts of all expenses attributed to `trip_id`.
    ///
    /// An unknown `trip_id` yields `0.0`, not an error.
    pub async fn total_for_trip(&self, trip_id: &str) -> f64 {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .map(|e| e.amount)
            .sum()
    }

    /// Folds spend into per-month buckets, ascending by `YYYY-MM` key.
    pub async fn spending_trends(&self) -> Vec<MonthlySpend> {
        latency::simulate(self.latency.query).await;
        let records = self.records.read().await;
        let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
        for expense in records.iter() {
            let month = expense.date.format("%Y-%m").to_string();
            *monthly.entry(month).or_insert(0.0) += expense.amount;
        }
        monthly
            .into_iter()
            .map(|(month, amount)| MonthlySpend { month, amount })
            .collect()
    }

    /// Folds spend into per-merchant buckets, highest spend first.
    pub async fn vendor_breakdown(&self) -> Vec<VendorSpend> {
        latency::simulate(self.latency.query).await;
        let records = self.records.read().await;
        let mut per_vendor: HashMap<String, f64> = HashMap::new();
        for expense in records.iter() {
            *per_vendor
                .entry(expense.merchant_name.clone())
                .or_insert(0.0) += expense.amount;
        }
        let mut rows: Vec<VendorSpend> = per_vendor
            .into_iter()
            .map(|(vendor, amount)| VendorSpend { vendor, amount })
            .collect();
        sort_by_amount_desc(&mut rows, |row| (row.amount, row.vendor.clone()));
        rows
    }

    /// Folds spend into per-category buckets, highest spend first.
    pub async fn category_breakdown(&self) -> Vec<CategorySpend> {
        latency::simulate(self.latency.query).await;
        let records = self.records.read().await;
        let mut per_category: HashMap<ExpenseCategory, f64> = HashMap::new();
        for expense in records.iter() {
            *per_category.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        let mut rows: Vec<CategorySpend> = per_category
            .into_iter()
            .map(|(category, amount)| CategorySpend { category, amount })
            .collect();
        sort_by_amount_desc(&mut rows, |row| (row.amount, row.category.name().to_string()));
        rows
    }
}

// Descending by amount, label ascending as the deterministic tie-break.
fn sort_by_amount_desc<T>(rows: &mut [T], key: impl Fn(&T) -> (f64, String)) {
    rows.sort_by(|a, b| {
        let (amount_a, label_a) = key(a);
        let (amount_b, label_b) = key(b);
        amount_b
            .partial_cmp(&amount_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| label_a.cmp(&label_b))
    });
}
