use chrono::NaiveDate;
use triptally_core::{
    EntityKind, ExpenseCategory, ExpensePatch, ExpenseStore, LatencyProfile, NewExpense,
    StoreError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn spend(
    trip_id: &str,
    merchant: &str,
    amount: f64,
    category: ExpenseCategory,
    on: NaiveDate,
) -> NewExpense {
    NewExpense {
        trip_id: trip_id.to_string(),
        merchant_name: merchant.to_string(),
        amount,
        currency: "USD".to_string(),
        category,
        date: on,
        notes: None,
        receipt_url: None,
        is_compliant: true,
    }
}

#[tokio::test]
async fn create_assigns_id_and_matching_timestamps() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    let expense = store
        .create(spend("t1", "Cafe", 12.5, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;

    assert!(!expense.id.is_empty());
    assert_eq!(expense.created_at, expense.updated_at);

    let loaded = store.get_by_id(&expense.id).await.expect("expense should exist");
    assert_eq!(loaded, expense);
}

#[tokio::test]
async fn update_merges_and_refreshes_updated_at() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    let created = store
        .create(spend("t1", "Cafe", 12.5, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;

    let patch = ExpensePatch {
        amount: Some(15.0),
        notes: Some("Added a tip".to_string()),
        ..ExpensePatch::default()
    };
    let updated = store.update(&created.id, patch).await.expect("update should succeed");

    assert_eq!(updated.amount, 15.0);
    assert_eq!(updated.notes.as_deref(), Some("Added a tip"));
    assert_eq!(updated.merchant_name, created.merchant_name);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    let err = store
        .update("999", ExpensePatch::default())
        .await
        .expect_err("missing id must fail");
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: EntityKind::Expense,
            ..
        }
    ));
}

#[tokio::test]
async fn delete_then_get_returns_none() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    let created = store
        .create(spend("t1", "Cafe", 12.5, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;

    store.delete(&created.id).await.expect("delete should succeed");
    assert!(store.get_by_id(&created.id).await.is_none());
    assert_eq!(store.get_all().await.len(), 0);
}

#[tokio::test]
async fn by_trip_and_by_category_filter_correctly() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    store
        .create(spend("t1", "Cafe", 12.5, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;
    store
        .create(spend("t1", "Taxi", 30.0, ExpenseCategory::Transportation, date(2024, 1, 3)))
        .await;
    store
        .create(spend("t2", "Diner", 22.0, ExpenseCategory::Meals, date(2024, 1, 4)))
        .await;

    let on_t1 = store.by_trip("t1").await;
    assert_eq!(on_t1.len(), 2);
    assert!(on_t1.iter().all(|e| e.trip_id == "t1"));

    let meals = store.by_category(ExpenseCategory::Meals).await;
    assert_eq!(meals.len(), 2);
    assert!(meals.iter().all(|e| e.category == ExpenseCategory::Meals));
}

#[tokio::test]
async fn total_for_trip_sums_amounts_and_defaults_to_zero() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    store
        .create(spend("t1", "Cafe", 12.5, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;
    store
        .create(spend("t1", "Taxi", 30.0, ExpenseCategory::Transportation, date(2024, 1, 3)))
        .await;

    assert_eq!(store.total_for_trip("t1").await, 42.5);
    assert_eq!(store.total_for_trip("unknown").await, 0.0);
}

#[tokio::test]
async fn spending_trends_buckets_by_month_ascending() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    store
        .create(spend("t1", "Hotel", 300.0, ExpenseCategory::Lodging, date(2024, 2, 10)))
        .await;
    store
        .create(spend("t1", "Cafe", 20.0, ExpenseCategory::Meals, date(2024, 1, 5)))
        .await;
    store
        .create(spend("t1", "Diner", 30.0, ExpenseCategory::Meals, date(2024, 1, 20)))
        .await;

    let trends = store.spending_trends().await;
    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].month, "2024-01");
    assert_eq!(trends[0].amount, 50.0);
    assert_eq!(trends[1].month, "2024-02");
    assert_eq!(trends[1].amount, 300.0);
}

#[tokio::test]
async fn vendor_breakdown_sorts_by_amount_descending() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    store
        .create(spend("t1", "Cafe", 10.0, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;
    store
        .create(spend("t1", "Hotel", 500.0, ExpenseCategory::Lodging, date(2024, 1, 3)))
        .await;
    store
        .create(spend("t1", "Cafe", 15.0, ExpenseCategory::Meals, date(2024, 1, 4)))
        .await;

    let breakdown = store.vendor_breakdown().await;
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].vendor, "Hotel");
    assert_eq!(breakdown[0].amount, 500.0);
    assert_eq!(breakdown[1].vendor, "Cafe");
    assert_eq!(breakdown[1].amount, 25.0);
}

#[tokio::test]
async fn category_breakdown_aggregates_per_category() {
    let store = ExpenseStore::new(LatencyProfile::zero());
    store
        .create(spend("t1", "Cafe", 10.0, ExpenseCategory::Meals, date(2024, 1, 2)))
        .await;
    store
        .create(spend("t1", "Diner", 40.0, ExpenseCategory::Meals, date(2024, 1, 3)))
        .await;
    store
        .create(spend("t1", "Taxi", 25.0, ExpenseCategory::Transportation, date(2024, 1, 3)))
        .await;

    let breakdown = store.category_breakdown().await;
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category, ExpenseCategory::Meals);
    assert_eq!(breakdown[0].amount, 50.0);
    assert_eq!(breakdown[1].category, ExpenseCategory::Transportation);
    assert_eq!(breakdown[1].amount, 25.0);
}
