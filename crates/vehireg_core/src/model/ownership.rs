//! Ownership link between one owner and one vehicle.
//!
//! # Invariants
//! - Identity is the `(owner_id, vehicle_id)` pair; at most one row per pair.
//! - `end_date` is optional and is not ordered against `start_date`.

use super::owner::OwnerId;
use super::vehicle::VehicleId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Time-bounded ownership of a vehicle.
///
/// Equality and hashing use the `(owner_id, vehicle_id)` pair only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ownership {
    pub owner_id: OwnerId,
    pub vehicle_id: VehicleId,
    pub start_date: NaiveDate,
    /// `None` while the owner still holds the vehicle.
    pub end_date: Option<NaiveDate>,
}

impl Ownership {
    /// Creates an open-ended ownership starting at `start_date`.
    pub fn new(owner_id: OwnerId, vehicle_id: VehicleId, start_date: NaiveDate) -> Self {
        Self {
            owner_id,
            vehicle_id,
            start_date,
            end_date: None,
        }
    }

    pub fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Returns the composite key.
    pub fn key(&self) -> (OwnerId, VehicleId) {
        (self.owner_id, self.vehicle_id)
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }
}

impl PartialEq for Ownership {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ownership {}

impl Hash for Ownership {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Ownership;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    }

    #[test]
    fn identity_is_the_owner_vehicle_pair() {
        let first = Ownership::new(1, 2, date(2020, 1, 1));
        let later = Ownership::new(1, 2, date(2021, 6, 1)).with_end_date(Some(date(2022, 1, 1)));
        assert_eq!(first, later);
        assert_ne!(first, Ownership::new(2, 1, date(2020, 1, 1)));
        assert!(first.is_open_ended());
        assert!(!later.is_open_ended());
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let ownership = Ownership::new(1, 2, date(2020, 1, 1));
        let json = serde_json::to_value(&ownership).expect("ownership should serialize");
        assert_eq!(json["start_date"], "2020-01-01");
        assert!(json["end_date"].is_null());
    }
}
