//! Trip domain model.
//!
//! # Responsibility
//! - Define the bounded travel event every expense and budget hangs off.
//! - Derive trip status from the date range for display-time callers.
//!
//! # Invariants
//! - `status` is stored redundantly on create (always `Active`); views that
//!   want a date-accurate value should call [`TripStatus::derive`].
//! - `end_date >= start_date` is expected but not checked; caller fields are
//!   trusted verbatim.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Coarse lifecycle bucket for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Today falls inside the trip's date range.
    Active,
    /// The trip has not started yet.
    Upcoming,
    /// The trip's date range is fully in the past.
    Completed,
}

impl TripStatus {
    /// Derives the status a trip's date range implies on `today`.
    ///
    /// The stored `status` field is a create-time snapshot; this is the
    /// date-accurate value views display.
    pub fn derive(start_date: NaiveDate, end_date: NaiveDate, today: NaiveDate) -> Self {
        if today < start_date {
            Self::Upcoming
        } else if today > end_date {
            Self::Completed
        } else {
            Self::Active
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }
}

/// A bounded travel event with a date range and an overall budget figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: RecordId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Headline budget amount; the detailed limits live on `Budget`.
    pub budget: f64,
    /// ISO 4217 code, stored verbatim.
    pub currency: String,
    /// Create-time snapshot; see [`TripStatus::derive`] for the live value.
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Returns the status implied by this trip's date range on `today`.
    pub fn status_on(&self, today: NaiveDate) -> TripStatus {
        TripStatus::derive(self.start_date, self.end_date, today)
    }

    /// Shallow-merges `patch` into this record. Absent fields are untouched.
    pub fn apply(&mut self, patch: TripPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Caller-supplied fields for `TripStore::create`.
///
/// The store assigns `id`, `status` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub currency: String,
}

/// Partial update for `TripStore::update`; `Some` fields replace wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<TripStatus>,
}

#[cfg(test)]
mod tests {
    use super::TripStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    }

    #[test]
    fn derive_covers_all_three_buckets() {
        let start = date(2024, 6, 10);
        let end = date(2024, 6, 15);

        assert_eq!(
            TripStatus::derive(start, end, date(2024, 6, 1)),
            TripStatus::Upcoming
        );
        assert_eq!(
            TripStatus::derive(start, end, date(2024, 6, 10)),
            TripStatus::Active
        );
        assert_eq!(
            TripStatus::derive(start, end, date(2024, 6, 15)),
            TripStatus::Active
        );
        assert_eq!(
            TripStatus::derive(start, end, date(2024, 6, 16)),
            TripStatus::Completed
        );
    }

    #[test]
    fn single_day_trip_is_active_on_that_day() {
        let day = date(2024, 7, 1);
        assert_eq!(TripStatus::derive(day, day, day), TripStatus::Active);
    }
}
