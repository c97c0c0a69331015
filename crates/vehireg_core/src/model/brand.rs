//! Brand record.

use super::identity_by_id;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate key of a brand row.
pub type BrandId = i64;

/// Vehicle manufacturer brand.
///
/// Equality and hashing use `id` only: two values with the same id denote
/// the same stored brand even if one carries a stale name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    /// Unique among brands.
    pub name: String,
}

identity_by_id!(Brand);

impl Display for Brand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
