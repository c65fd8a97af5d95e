//! Expense domain model.
//!
//! # Responsibility
//! - Define a single spend record attributed to a trip.
//! - Keep the category vocabulary closed so budgets can key limits off it.
//!
//! # Invariants
//! - `amount` is expected non-negative but not checked; caller fields are
//!   trusted verbatim.
//! - `trip_id` and `receipt_url` are weak references; the store never
//!   validates them against other stores.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Fixed spend-category vocabulary shared by expenses and budget limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Meals,
    Transportation,
    Lodging,
    Conference,
    Supplies,
    Other,
}

impl ExpenseCategory {
    /// Every category, in display order.
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Meals,
        Self::Transportation,
        Self::Lodging,
        Self::Conference,
        Self::Supplies,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Meals => "meals",
            Self::Transportation => "transportation",
            Self::Lodging => "lodging",
            Self::Conference => "conference",
            Self::Supplies => "supplies",
            Self::Other => "other",
        }
    }
}

/// A single spend record attributed to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: RecordId,
    /// Weak reference to a `Trip`; not validated.
    pub trip_id: RecordId,
    pub merchant_name: String,
    pub amount: f64,
    /// ISO 4217 code, stored verbatim.
    pub currency: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub notes: Option<String>,
    /// Weak reference to a captured receipt image; not validated.
    pub receipt_url: Option<String>,
    pub is_compliant: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Shallow-merges `patch` into this record.
    ///
    /// Absent fields are untouched; the store refreshes `updated_at` after a
    /// successful merge, not this method.
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(trip_id) = patch.trip_id {
            self.trip_id = trip_id;
        }
        if let Some(merchant_name) = patch.merchant_name {
            self.merchant_name = merchant_name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(receipt_url) = patch.receipt_url {
            self.receipt_url = Some(receipt_url);
        }
        if let Some(is_compliant) = patch.is_compliant {
            self.is_compliant = is_compliant;
        }
    }
}

/// Caller-supplied fields for `ExpenseStore::create`.
///
/// The store assigns `id`, `created_at` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub trip_id: RecordId,
    pub merchant_name: String,
    pub amount: f64,
    pub currency: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
    #[serde(default)]
    pub is_compliant: bool,
}

/// Partial update for `ExpenseStore::update`.
///
/// `Some` fields replace wholesale; optional record fields can be set but
/// not cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub trip_id: Option<RecordId>,
    pub merchant_name: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub receipt_url: Option<String>,
    pub is_compliant: Option<bool>,
}
