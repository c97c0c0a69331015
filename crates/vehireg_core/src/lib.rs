//! Core data-access layer for vehicle registration records.
//! This crate is the single source of truth for uniqueness and
//! referential-integrity rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::brand::{Brand, BrandId};
pub use model::owner::{Owner, OwnerDraft, OwnerId};
pub use model::ownership::Ownership;
pub use model::vehicle::{Vehicle, VehicleDraft, VehicleId};
pub use model::vehicle_model::{ModelId, VehicleModel};
pub use repo::brand_repo::{BrandRepository, SqliteBrandRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::owner_repo::{OwnerRepository, SqliteOwnerRepository};
pub use repo::ownership_repo::{OwnershipRepository, SqliteOwnershipRepository};
pub use repo::vehicle_model_repo::{SqliteVehicleModelRepository, VehicleModelRepository};
pub use repo::vehicle_repo::{SqliteVehicleRepository, VehicleRepository};
pub use service::brand_service::BrandService;
pub use service::owner_service::OwnerService;
pub use service::ownership_service::OwnershipService;
pub use service::vehicle_model_service::VehicleModelService;
pub use service::vehicle_service::VehicleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
