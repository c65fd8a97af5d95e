//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `triptally_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use triptally_core::{LatencyProfile, Stores};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("triptally_core ping={}", triptally_core::ping());
    println!("triptally_core version={}", triptally_core::core_version());

    // Zero latency keeps the probe instant and its output stable.
    let stores = Stores::with_fixtures(LatencyProfile::zero());
    let (trips, expenses, budgets, receipts) = tokio::join!(
        stores.trips.get_all(),
        stores.expenses.get_all(),
        stores.budgets.get_all(),
        stores.receipts.get_all(),
    );
    println!(
        "fixtures trips={} expenses={} budgets={} receipts={}",
        trips.len(),
        expenses.len(),
        budgets.len(),
        receipts.len()
    );

    for trip in trips {
        let spent = stores.expenses.total_for_trip(&trip.id).await;
        println!(
            "trip id={} name={:?} status={} spent={:.2} {}",
            trip.id,
            trip.name,
            trip.status.name(),
            spent,
            trip.currency
        );
    }
}
