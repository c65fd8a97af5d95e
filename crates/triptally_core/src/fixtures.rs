//! Seed datasets standing in for a real backend's data.
//!
//! # Responsibility
//! - Provide one fixed-shape fixture collection per entity, loaded into a
//!   store once at construction time.
//!
//! # Invariants
//! - Fixture ids are unique within each collection and never collide with
//!   generated ids (generated ids are epoch-millisecond values).
//! - Weak references between fixtures resolve within the fixture set.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;

use crate::model::budget::Budget;
use crate::model::expense::{Expense, ExpenseCategory};
use crate::model::receipt::Receipt;
use crate::model::trip::{Trip, TripStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn timestamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Seed trips: one completed, one active, one upcoming.
pub fn trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "1001".to_string(),
            name: "Lisbon Web Summit".to_string(),
            start_date: date(2024, 11, 11),
            end_date: date(2024, 11, 14),
            budget: 2800.0,
            currency: "EUR".to_string(),
            status: TripStatus::Completed,
            created_at: timestamp(2024, 10, 2),
        },
        Trip {
            id: "1002".to_string(),
            name: "Chicago Client Kickoff".to_string(),
            start_date: date(2025, 8, 20),
            end_date: date(2025, 9, 2),
            budget: 4200.0,
            currency: "USD".to_string(),
            status: TripStatus::Active,
            created_at: timestamp(2025, 7, 28),
        },
        Trip {
            id: "1003".to_string(),
            name: "Tokyo Hardware Expo".to_string(),
            start_date: date(2026, 1, 12),
            end_date: date(2026, 1, 17),
            budget: 600_000.0,
            currency: "JPY".to_string(),
            status: TripStatus::Upcoming,
            created_at: timestamp(2025, 8, 15),
        },
    ]
}

/// Seed expenses attributed to the fixture trips.
pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "2001".to_string(),
            trip_id: "1001".to_string(),
            merchant_name: "Cafe Nicola".to_string(),
            amount: 18.40,
            currency: "EUR".to_string(),
            category: ExpenseCategory::Meals,
            date: date(2024, 11, 11),
            notes: None,
            receipt_url: None,
            is_compliant: true,
            created_at: timestamp(2024, 11, 11),
            updated_at: timestamp(2024, 11, 11),
        },
        Expense {
            id: "2002".to_string(),
            trip_id: "1001".to_string(),
            merchant_name: "Metro Lisboa".to_string(),
            amount: 6.50,
            currency: "EUR".to_string(),
            category: ExpenseCategory::Transportation,
            date: date(2024, 11, 12),
            notes: Some("Day pass".to_string()),
            receipt_url: None,
            is_compliant: true,
            created_at: timestamp(2024, 11, 12),
            updated_at: timestamp(2024, 11, 12),
        },
        Expense {
            id: "2003".to_string(),
            trip_id: "1001".to_string(),
            merchant_name: "Hotel Mundial".to_string(),
            amount: 540.0,
            currency: "EUR".to_string(),
            category: ExpenseCategory::Lodging,
            date: date(2024, 11, 14),
            notes: None,
            receipt_url: Some("mock://receipts/hotel-mundial.jpg".to_string()),
            is_compliant: true,
            created_at: timestamp(2024, 11, 14),
            updated_at: timestamp(2024, 11, 14),
        },
        Expense {
            id: "2004".to_string(),
            trip_id: "1002".to_string(),
            merchant_name: "OHare Taxi Co".to_string(),
            amount: 62.0,
            currency: "USD".to_string(),
            category: ExpenseCategory::Transportation,
            date: date(2025, 8, 20),
            notes: None,
            receipt_url: None,
            is_compliant: true,
            created_at: timestamp(2025, 8, 20),
            updated_at: timestamp(2025, 8, 20),
        },
        Expense {
            id: "2005".to_string(),
            trip_id: "1002".to_string(),
            merchant_name: "The Berghoff".to_string(),
            amount: 84.75,
            currency: "USD".to_string(),
            category: ExpenseCategory::Meals,
            date: date(2025, 8, 21),
            notes: Some("Dinner with client".to_string()),
            receipt_url: Some("mock://receipts/berghoff.jpg".to_string()),
            is_compliant: false,
            created_at: timestamp(2025, 8, 21),
            updated_at: timestamp(2025, 8, 21),
        },
        Expense {
            id: "2006".to_string(),
            trip_id: "1002".to_string(),
            merchant_name: "FedEx Office Print".to_string(),
            amount: 23.10,
            currency: "USD".to_string(),
            category: ExpenseCategory::Supplies,
            date: date(2025, 8, 22),
            notes: None,
            receipt_url: None,
            is_compliant: true,
            created_at: timestamp(2025, 8, 22),
            updated_at: timestamp(2025, 8, 22),
        },
    ]
}

/// Seed budgets, one per trip that has started.
pub fn budgets() -> Vec<Budget> {
    vec![
        Budget {
            id: "3001".to_string(),
            trip_id: "1001".to_string(),
            total_amount: 3000.0,
            daily_limit: 400.0,
            category_limits: HashMap::from([
                (ExpenseCategory::Meals, 600.0),
                (ExpenseCategory::Lodging, 1500.0),
                (ExpenseCategory::Transportation, 300.0),
            ]),
            alert_threshold: 80.0,
            created_at: timestamp(2024, 10, 2),
        },
        Budget {
            id: "3002".to_string(),
            trip_id: "1002".to_string(),
            total_amount: 4500.0,
            daily_limit: 350.0,
            category_limits: HashMap::from([
                (ExpenseCategory::Meals, 900.0),
                (ExpenseCategory::Lodging, 2000.0),
                (ExpenseCategory::Conference, 800.0),
            ]),
            alert_threshold: 75.0,
            created_at: timestamp(2025, 7, 28),
        },
    ]
}

/// Seed receipts for the two fixture expenses that captured one.
pub fn receipts() -> Vec<Receipt> {
    vec![
        Receipt {
            id: "4001".to_string(),
            expense_id: "2003".to_string(),
            image_url: "mock://receipts/hotel-mundial.jpg".to_string(),
            ocr_data: json!({
                "merchantName": "Hotel Mundial",
                "amount": 540.0,
                "date": "2024-11-14",
                "category": "lodging",
            }),
            confidence: 0.93,
            processed_at: timestamp(2024, 11, 14),
        },
        Receipt {
            id: "4002".to_string(),
            expense_id: "2005".to_string(),
            image_url: "mock://receipts/berghoff.jpg".to_string(),
            ocr_data: json!({
                "merchantName": "The Berghoff",
                "amount": 84.75,
                "date": "2025-08-21",
                "category": "meals",
            }),
            confidence: 0.88,
            processed_at: timestamp(2025, 8, 21),
        },
    ]
}
