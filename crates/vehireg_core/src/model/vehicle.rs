//! Vehicle record and its write draft.
//!
//! # Invariants
//! - `registration` is unique among vehicles.
//! - Numeric fields are stored as given; range checks belong to callers.

use super::identity_by_id;
use super::vehicle_model::ModelId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate key of a vehicle row.
pub type VehicleId = i64;

/// Field set accepted by vehicle create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    /// Registration plate code.
    pub registration: String,
    pub model_year: i32,
    /// Weight in kilograms.
    pub weight: f64,
    /// Rated power in horsepower.
    pub horsepower: i32,
    /// Administrative (fiscal) power rating.
    pub fiscal_power: i32,
    pub model_id: ModelId,
}

/// Stored vehicle.
///
/// Equality and hashing use `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub registration: String,
    pub model_year: i32,
    pub weight: f64,
    pub horsepower: i32,
    pub fiscal_power: i32,
    pub model_id: ModelId,
}

identity_by_id!(Vehicle);

impl Vehicle {
    /// Builds the stored shape from a draft and its assigned id.
    pub fn from_draft(id: VehicleId, draft: VehicleDraft) -> Self {
        Self {
            id,
            registration: draft.registration,
            model_year: draft.model_year,
            weight: draft.weight,
            horsepower: draft.horsepower,
            fiscal_power: draft.fiscal_power,
            model_id: draft.model_id,
        }
    }

    /// Returns the editable fields, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> VehicleDraft {
        VehicleDraft {
            registration: self.registration.clone(),
            model_year: self.model_year,
            weight: self.weight,
            horsepower: self.horsepower,
            fiscal_power: self.fiscal_power,
            model_id: self.model_id,
        }
    }
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.registration)
    }
}
