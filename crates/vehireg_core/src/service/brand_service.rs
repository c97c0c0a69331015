//! Brand use-case service.

use crate::model::brand::{Brand, BrandId};
use crate::repo::brand_repo::BrandRepository;
use crate::repo::error::RepoResult;
use crate::service::logged;

/// Use-case facade over a brand repository.
pub struct BrandService<R: BrandRepository> {
    repo: R,
}

impl<R: BrandRepository> BrandService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn fetch_all_brands(&self) -> RepoResult<Vec<Brand>> {
        logged("brand_fetch_all", self.repo.list_brands())
    }

    /// Returns the new brand id, or `Duplicate` when the name is taken.
    pub fn create_brand(&self, name: &str) -> RepoResult<BrandId> {
        logged("brand_create", self.repo.create_brand(name))
    }

    pub fn modify_brand(&self, id: BrandId, name: &str) -> RepoResult<()> {
        logged("brand_modify", self.repo.update_brand(id, name))
    }

    /// Fails with `HasDependents` while any model references the brand.
    pub fn remove_brand(&self, id: BrandId) -> RepoResult<()> {
        logged("brand_remove", self.repo.delete_brand(id))
    }

    pub fn find_brand_by_id(&self, id: BrandId) -> RepoResult<Option<Brand>> {
        logged("brand_find", self.repo.get_brand(id))
    }
}
