//! Ownership use-case service.
//!
//! Ownerships are addressed by `(owner_id, vehicle_id)`; there is no
//! surrogate id, so the lookup verb is `find_ownership`.

use crate::model::owner::OwnerId;
use crate::model::ownership::Ownership;
use crate::model::vehicle::VehicleId;
use crate::repo::error::RepoResult;
use crate::repo::ownership_repo::OwnershipRepository;
use crate::service::logged;

/// Use-case facade over an ownership repository.
pub struct OwnershipService<R: OwnershipRepository> {
    repo: R,
}

impl<R: OwnershipRepository> OwnershipService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn fetch_all_ownerships(&self) -> RepoResult<Vec<Ownership>> {
        logged("ownership_fetch_all", self.repo.list_ownerships())
    }

    /// Fails with `Duplicate` when the pair already has an ownership row.
    pub fn create_ownership(&self, ownership: &Ownership) -> RepoResult<()> {
        logged("ownership_create", self.repo.create_ownership(ownership))
    }

    /// Replaces the dates of an existing pair; `NotFound` when absent.
    pub fn modify_ownership(&self, ownership: &Ownership) -> RepoResult<()> {
        logged("ownership_modify", self.repo.update_ownership(ownership))
    }

    pub fn remove_ownership(&self, owner_id: OwnerId, vehicle_id: VehicleId) -> RepoResult<()> {
        logged(
            "ownership_remove",
            self.repo.delete_ownership(owner_id, vehicle_id),
        )
    }

    pub fn find_ownership(
        &self,
        owner_id: OwnerId,
        vehicle_id: VehicleId,
    ) -> RepoResult<Option<Ownership>> {
        logged(
            "ownership_find",
            self.repo.get_ownership(owner_id, vehicle_id),
        )
    }
}
