use super::{
    deleted, label_or_dash, missing, read, render, saved, CommandResult, NOT_FOUND, SAVE_FAILED,
};
use crate::config::EntityAction;
use crate::form::ModelInput;
use rusqlite::Connection;
use std::collections::HashMap;
use tabled::Tabled;
use vehireg_core::{
    BrandId, BrandService, SqliteBrandRepository, SqliteVehicleModelRepository, VehicleModel,
    VehicleModelService,
};

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Model")]
    name: String,
    #[tabled(rename = "Brand")]
    brand: String,
}

impl ModelRow {
    fn new(model: &VehicleModel, brand_names: &HashMap<BrandId, String>) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            brand: label_or_dash(brand_names.get(&model.brand_id)),
        }
    }
}

/// Brand id to brand name, for listing labels.
pub(super) fn brand_names(conn: &Connection) -> CommandResult<HashMap<BrandId, String>> {
    let brands = BrandService::new(read(SqliteBrandRepository::try_new(conn))?);
    Ok(read(brands.fetch_all_brands())?
        .into_iter()
        .map(|brand| (brand.id, brand.name))
        .collect())
}

pub(super) fn run(
    conn: &Connection,
    action: EntityAction<ModelInput>,
    json: bool,
) -> CommandResult<String> {
    let service = VehicleModelService::new(read(SqliteVehicleModelRepository::try_new(conn))?);
    match action {
        EntityAction::List => {
            let models = read(service.fetch_all_models())?;
            let brand_names = brand_names(conn)?;
            let rows = models
                .iter()
                .map(|model| ModelRow::new(model, &brand_names))
                .collect();
            render(&models, rows, json)
        }
        EntityAction::Show { id } => {
            let model = read(service.find_model_by_id(id))?
                .ok_or_else(|| missing(NOT_FOUND, "model", id.to_string()))?;
            let rows = vec![ModelRow::new(&model, &brand_names(conn)?)];
            render(&model, rows, json)
        }
        EntityAction::Add { input } => {
            let (name, brand_id) = input.validate()?;
            saved(service.create_model(&name, brand_id))
        }
        EntityAction::Edit { id, input } => {
            let stored = read(service.find_model_by_id(id))?
                .ok_or_else(|| missing(SAVE_FAILED, "model", id.to_string()))?;
            let (name, brand_id) = input.or_stored(&stored).validate()?;
            saved(service.modify_model(id, &name, brand_id))
        }
        EntityAction::Delete { id } => deleted(service.remove_model(id)),
    }
}
