//! Vehicle use-case service.

use crate::model::vehicle::{Vehicle, VehicleDraft, VehicleId};
use crate::repo::error::RepoResult;
use crate::repo::vehicle_repo::VehicleRepository;
use crate::service::logged;

/// Use-case facade over a vehicle repository.
pub struct VehicleService<R: VehicleRepository> {
    repo: R,
}

impl<R: VehicleRepository> VehicleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn fetch_all_vehicles(&self) -> RepoResult<Vec<Vehicle>> {
        logged("vehicle_fetch_all", self.repo.list_vehicles())
    }

    /// Returns the new vehicle id, or `Duplicate` when the registration is taken.
    pub fn create_vehicle(&self, draft: &VehicleDraft) -> RepoResult<VehicleId> {
        logged("vehicle_create", self.repo.create_vehicle(draft))
    }

    pub fn modify_vehicle(&self, id: VehicleId, draft: &VehicleDraft) -> RepoResult<()> {
        logged("vehicle_modify", self.repo.update_vehicle(id, draft))
    }

    /// Fails with `HasDependents` while any ownership references the vehicle.
    pub fn remove_vehicle(&self, id: VehicleId) -> RepoResult<()> {
        logged("vehicle_remove", self.repo.delete_vehicle(id))
    }

    pub fn find_vehicle_by_id(&self, id: VehicleId) -> RepoResult<Option<Vehicle>> {
        logged("vehicle_find", self.repo.get_vehicle(id))
    }
}
