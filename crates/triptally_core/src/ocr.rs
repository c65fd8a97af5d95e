//! Mock OCR extraction.
//!
//! # Responsibility
//! - Stand in for a real receipt-recognition backend during UI development.
//!
//! # Invariants
//! - Extraction is pure make-believe: a fixed sample merchant, a random
//!   amount and a high random confidence. The input image is never read.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::expense::ExpenseCategory;

const SAMPLE_MERCHANT: &str = "Sample Restaurant";
const CONFIDENCE_FLOOR: f64 = 0.85;

/// Fields the mock extractor claims to have read off a receipt image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrExtraction {
    pub merchant_name: String,
    /// Random amount in `[0, 100)`, whole cents.
    pub amount: f64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    /// Random confidence in `[0.85, 1.0)`.
    pub confidence: f64,
}

impl OcrExtraction {
    /// Converts the extraction into the free-form `ocr_data` JSON shape
    /// stored on a `Receipt`.
    pub fn into_fields(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Fabricates an extraction result for `image_ref`.
///
/// `image_ref` only identifies the scan for logging; its content is ignored.
pub(crate) fn extract(_image_ref: &str) -> OcrExtraction {
    let mut rng = rand::thread_rng();
    let cents: u32 = rng.gen_range(0..10_000);
    OcrExtraction {
        merchant_name: SAMPLE_MERCHANT.to_string(),
        amount: f64::from(cents) / 100.0,
        date: Utc::now().date_naive(),
        category: ExpenseCategory::Meals,
        confidence: CONFIDENCE_FLOOR + rng.gen::<f64>() * (1.0 - CONFIDENCE_FLOOR),
    }
}

#[cfg(test)]
mod tests {
    use super::extract;
    use crate::model::expense::ExpenseCategory;

    #[test]
    fn extraction_stays_inside_documented_ranges() {
        for _ in 0..100 {
            let extraction = extract("capture-1.jpg");
            assert!((0.0..100.0).contains(&extraction.amount));
            // Whole cents only.
            let cents = extraction.amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
            assert!((0.85..1.0).contains(&extraction.confidence));
            assert_eq!(extraction.category, ExpenseCategory::Meals);
            assert!(!extraction.merchant_name.is_empty());
        }
    }

    #[test]
    fn into_fields_keeps_camel_case_keys() {
        let fields = extract("capture-2.jpg").into_fields();
        assert!(fields.get("merchantName").is_some());
        assert!(fields.get("confidence").is_some());
    }
}
