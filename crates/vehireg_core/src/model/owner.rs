//! Owner record and its write draft.
//!
//! Owners carry no uniqueness rule: identical people may be stored twice.

use super::identity_by_id;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate key of an owner row.
pub type OwnerId = i64;

/// Field set accepted by owner create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerDraft {
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

/// Stored owner.
///
/// Equality and hashing use `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

identity_by_id!(Owner);

impl Owner {
    pub fn to_draft(&self) -> OwnerDraft {
        OwnerDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            address: self.address.clone(),
            postal_code: self.postal_code.clone(),
            city: self.city.clone(),
        }
    }

    /// Display label, first name first.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
