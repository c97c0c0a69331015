//! Vehicle model record (a named model of one brand).

use super::brand::BrandId;
use super::identity_by_id;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate key of a model row.
pub type ModelId = i64;

/// Named model belonging to exactly one brand.
///
/// Equality and hashing use `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: ModelId,
    /// Unique within `brand_id`; the same name may exist under other brands.
    pub name: String,
    pub brand_id: BrandId,
}

identity_by_id!(VehicleModel);

impl Display for VehicleModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
