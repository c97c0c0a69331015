//! Owner use-case service.

use crate::model::owner::{Owner, OwnerDraft, OwnerId};
use crate::repo::error::RepoResult;
use crate::repo::owner_repo::OwnerRepository;
use crate::service::logged;

/// Use-case facade over an owner repository.
pub struct OwnerService<R: OwnerRepository> {
    repo: R,
}

impl<R: OwnerRepository> OwnerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn fetch_all_owners(&self) -> RepoResult<Vec<Owner>> {
        logged("owner_fetch_all", self.repo.list_owners())
    }

    pub fn create_owner(&self, draft: &OwnerDraft) -> RepoResult<OwnerId> {
        logged("owner_create", self.repo.create_owner(draft))
    }

    pub fn modify_owner(&self, id: OwnerId, draft: &OwnerDraft) -> RepoResult<()> {
        logged("owner_modify", self.repo.update_owner(id, draft))
    }

    /// Fails with `HasDependents` while any ownership references the owner.
    pub fn remove_owner(&self, id: OwnerId) -> RepoResult<()> {
        logged("owner_remove", self.repo.delete_owner(id))
    }

    pub fn find_owner_by_id(&self, id: OwnerId) -> RepoResult<Option<Owner>> {
        logged("owner_find", self.repo.get_owner(id))
    }
}
