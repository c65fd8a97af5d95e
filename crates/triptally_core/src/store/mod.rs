//! In-memory resource stores emulating a remote persistence service.
//!
//! # Responsibility
//! - Provide one async CRUD store per entity over an owned working set.
//! - Define the shared failure taxonomy and record-id generation.
//!
//! # Invariants
//! - Stores hand out owned copies only; the live working set is never
//!   exposed to callers.
//! - The only modeled failure is `NotFound` on `update`/`delete`; a failed
//!   operation leaves the working set unchanged.
//! - Stores never reference each other's data; deletes do not cascade.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::model::RecordId;

pub mod budget_store;
pub mod expense_store;
pub mod latency;
pub mod receipt_store;
pub mod trip_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity family a store manages; used for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Trip,
    Expense,
    Budget,
    Receipt,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::Expense => "expense",
            Self::Budget => "budget",
            Self::Receipt => "receipt",
        }
    }
}

/// Store operation failure.
///
/// Exactly one structured kind exists: a referenced id was absent during
/// `update` or `delete`. Reads never fail; malformed caller input is stored
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound { entity: EntityKind, id: RecordId },
}

impl StoreError {
    pub(crate) fn not_found(entity: EntityKind, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{} not found: {id}", entity.name()),
        }
    }
}

impl Error for StoreError {}

// Highest id value issued so far, in epoch milliseconds.
static LAST_ISSUED_MS: AtomicU64 = AtomicU64::new(0);

/// Issues a new current-time-derived record id.
///
/// Ids are opaque decimal strings of the current epoch-millisecond clock.
/// Two creates inside the same millisecond would collide, so the counter
/// bumps monotonically past the last issued value.
pub(crate) fn next_record_id() -> RecordId {
    let now_ms = Utc::now().timestamp_millis().max(0) as u64;
    let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
    loop {
        let candidate = now_ms.max(last + 1);
        match LAST_ISSUED_MS.compare_exchange_weak(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{next_record_id, EntityKind, StoreError};
    use std::collections::HashSet;

    #[test]
    fn record_ids_are_unique_under_rapid_issue() {
        let ids: HashSet<_> = (0..1000).map(|_| next_record_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn record_ids_are_strictly_increasing_numerics() {
        let first: u64 = next_record_id().parse().expect("decimal id");
        let second: u64 = next_record_id().parse().expect("decimal id");
        assert!(second > first);
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = StoreError::not_found(EntityKind::Budget, "42");
        assert_eq!(err.to_string(), "budget not found: 42");
    }
}
