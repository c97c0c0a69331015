//! Vehicle model use-case service.

use crate::model::brand::BrandId;
use crate::model::vehicle_model::{ModelId, VehicleModel};
use crate::repo::error::RepoResult;
use crate::repo::vehicle_model_repo::VehicleModelRepository;
use crate::service::logged;

/// Use-case facade over a vehicle model repository.
pub struct VehicleModelService<R: VehicleModelRepository> {
    repo: R,
}

impl<R: VehicleModelRepository> VehicleModelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn fetch_all_models(&self) -> RepoResult<Vec<VehicleModel>> {
        logged("model_fetch_all", self.repo.list_models())
    }

    /// Returns the new model id, or `Duplicate` when `name` is taken under `brand_id`.
    pub fn create_model(&self, name: &str, brand_id: BrandId) -> RepoResult<ModelId> {
        logged("model_create", self.repo.create_model(name, brand_id))
    }

    pub fn modify_model(&self, id: ModelId, name: &str, brand_id: BrandId) -> RepoResult<()> {
        logged("model_modify", self.repo.update_model(id, name, brand_id))
    }

    /// Fails with `HasDependents` while any vehicle references the model.
    pub fn remove_model(&self, id: ModelId) -> RepoResult<()> {
        logged("model_remove", self.repo.delete_model(id))
    }

    pub fn find_model_by_id(&self, id: ModelId) -> RepoResult<Option<VehicleModel>> {
        logged("model_find", self.repo.get_model(id))
    }
}
