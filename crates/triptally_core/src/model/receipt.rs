//! Receipt domain model.
//!
//! # Responsibility
//! - Define a captured receipt image plus its extracted (OCR) fields.
//!
//! # Invariants
//! - `ocr_data` is free-form JSON; the store never interprets it.
//! - `confidence` is expected in `[0, 1]` but not checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::RecordId;

/// A captured receipt image tied to an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: RecordId,
    /// Weak reference to an `Expense`; not validated.
    pub expense_id: RecordId,
    pub image_url: String,
    /// Free-form extracted fields, kept as raw JSON.
    pub ocr_data: Value,
    /// Extraction confidence in `[0, 1]`.
    pub confidence: f64,
    pub processed_at: DateTime<Utc>,
}

impl Receipt {
    /// Shallow-merges `patch` into this record. Absent fields are untouched.
    ///
    /// A `Some(ocr_data)` replaces the whole JSON blob.
    pub fn apply(&mut self, patch: ReceiptPatch) {
        if let Some(expense_id) = patch.expense_id {
            self.expense_id = expense_id;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(ocr_data) = patch.ocr_data {
            self.ocr_data = ocr_data;
        }
        if let Some(confidence) = patch.confidence {
            self.confidence = confidence;
        }
    }
}

/// Caller-supplied fields for `ReceiptStore::create`.
///
/// The store assigns `id` and `processed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceipt {
    pub expense_id: RecordId,
    pub image_url: String,
    #[serde(default)]
    pub ocr_data: Value,
    pub confidence: f64,
}

/// Partial update for `ReceiptStore::update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptPatch {
    pub expense_id: Option<RecordId>,
    pub image_url: Option<String>,
    pub ocr_data: Option<Value>,
    pub confidence: Option<f64>,
}
