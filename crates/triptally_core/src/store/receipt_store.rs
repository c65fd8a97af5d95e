//! Receipt store: async CRUD, per-expense lookup and mock OCR scanning.
//!
//! # Responsibility
//! - Own the in-memory working set of captured receipts.
//! - Front the mock OCR extractor behind the same async store contract.
//!
//! # Invariants
//! - `scan` never touches the working set; persisting an extraction is the
//!   caller's explicit `create` step.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use tokio::sync::RwLock;

use crate::model::receipt::{NewReceipt, Receipt, ReceiptPatch};
use crate::ocr::{self, OcrExtraction};
use crate::store::latency::{self, LatencyProfile};
use crate::store::{next_record_id, EntityKind, StoreError, StoreResult};

/// In-memory receipt store; cheap to clone, clones share the working set.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    records: Arc<RwLock<Vec<Receipt>>>,
    latency: LatencyProfile,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    /// Creates a store pre-loaded with `records`, preserving their order.
    pub fn seeded(records: Vec<Receipt>, latency: LatencyProfile) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Returns a copy of every receipt, in insertion order. Never fails.
    pub async fn get_all(&self) -> Vec<Receipt> {
        latency::simulate(self.latency.list).await;
        self.records.read().await.clone()
    }

    /// Returns a copy of the matching receipt, or `None` when absent.
    pub async fn get_by_id(&self, id: &str) -> Option<Receipt> {
        latency::simulate(self.latency.lookup).await;
        self.records.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Appends a new receipt and returns the stored copy.
    ///
    /// Assigns a fresh id and sets `processed_at` to now.
    pub async fn create(&self, draft: NewReceipt) -> Receipt {
        latency::simulate(self.latency.create).await;
        let receipt = Receipt {
            id: next_record_id(),
            expense_id: draft.expense_id,
            image_url: draft.image_url,
            ocr_data: draft.ocr_data,
            confidence: draft.confidence,
            processed_at: Utc::now(),
        };
        self.records.write().await.push(receipt.clone());
        receipt
    }

    /// Shallow-merges `patch` into the receipt with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no receipt has `id`.
    pub async fn update(&self, id: &str, patch: ReceiptPatch) -> StoreResult<Receipt> {
        latency::simulate(self.latency.update).await;
        let mut records = self.records.write().await;
        let receipt = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Receipt, id))?;
        receipt.apply(patch);
        Ok(receipt.clone())
    }

    /// Removes the receipt with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no receipt has `id`.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        latency::simulate(self.latency.delete).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Receipt, id))?;
        records.remove(index);
        Ok(())
    }

    /// Returns all receipts attributed to `expense_id`, in insertion order.
    pub async fn by_expense(&self, expense_id: &str) -> Vec<Receipt> {
        latency::simulate(self.latency.query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.expense_id == expense_id)
            .cloned()
            .collect()
    }

    /// Runs the mock OCR extractor over `image_ref`.
    ///
    /// # Side effects
    /// - Emits an `ocr_scan` logging event.
    /// - Does not store anything; pair with `create` to persist the result.
    pub async fn scan(&self, image_ref: &str) -> OcrExtraction {
        latency::simulate(self.latency.scan).await;
        let extraction = ocr::extract(image_ref);
        info!(
            "event=ocr_scan module=receipt_store status=ok image_ref={} confidence={:.2}",
            image_ref, extraction.confidence
        );
        extraction
    }
}
