//! Domain records for the trip expense tracker.
//!
//! # Responsibility
//! - Define the canonical shapes held by each in-memory store.
//! - Provide draft (`New*`) and patch (`*Patch`) types used by create/update.
//!
//! # Invariants
//! - Every record carries a stable, store-unique `RecordId`.
//! - Cross-entity references (`trip_id`, `expense_id`, `receipt_url`) are
//!   weak: never validated, never cascaded.

pub mod budget;
pub mod expense;
pub mod receipt;
pub mod trip;

/// Opaque record identifier, unique within one store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Stores generate ids from the current time in milliseconds, with a
/// monotonic bump so rapid creates never collide.
pub type RecordId = String;
