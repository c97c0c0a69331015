use super::model::brand_names;
use super::{
    deleted, label_or_dash, missing, read, render, saved, CommandResult, NOT_FOUND, SAVE_FAILED,
};
use crate::config::EntityAction;
use crate::form::VehicleInput;
use rusqlite::Connection;
use std::collections::HashMap;
use tabled::Tabled;
use vehireg_core::{
    ModelId, SqliteVehicleModelRepository, SqliteVehicleRepository, Vehicle, VehicleModelService,
    VehicleService,
};

#[derive(Tabled)]
struct VehicleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Year")]
    model_year: i32,
    #[tabled(rename = "Weight")]
    weight: f64,
    #[tabled(rename = "HP")]
    horsepower: i32,
    #[tabled(rename = "Fiscal HP")]
    fiscal_power: i32,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Brand")]
    brand: String,
}

/// Model name and brand name, keyed by model id.
type ModelLabels = HashMap<ModelId, (String, String)>;

impl VehicleRow {
    fn new(vehicle: &Vehicle, labels: &ModelLabels) -> Self {
        let (model, brand) = labels
            .get(&vehicle.model_id)
            .map(|(model, brand)| (model.clone(), brand.clone()))
            .unwrap_or_else(|| (label_or_dash(None), label_or_dash(None)));
        Self {
            id: vehicle.id,
            registration: vehicle.registration.clone(),
            model_year: vehicle.model_year,
            weight: vehicle.weight,
            horsepower: vehicle.horsepower,
            fiscal_power: vehicle.fiscal_power,
            model,
            brand,
        }
    }
}

fn model_labels(conn: &Connection) -> CommandResult<ModelLabels> {
    let models = VehicleModelService::new(read(SqliteVehicleModelRepository::try_new(conn))?);
    let brand_names = brand_names(conn)?;
    Ok(read(models.fetch_all_models())?
        .into_iter()
        .map(|model| {
            let brand = label_or_dash(brand_names.get(&model.brand_id));
            (model.id, (model.name, brand))
        })
        .collect())
}

pub(super) fn run(
    conn: &Connection,
    action: EntityAction<VehicleInput>,
    json: bool,
) -> CommandResult<String> {
    let service = VehicleService::new(read(SqliteVehicleRepository::try_new(conn))?);
    match action {
        EntityAction::List => {
            let vehicles = read(service.fetch_all_vehicles())?;
            let labels = model_labels(conn)?;
            let rows = vehicles
                .iter()
                .map(|vehicle| VehicleRow::new(vehicle, &labels))
                .collect();
            render(&vehicles, rows, json)
        }
        EntityAction::Show { id } => {
            let vehicle = read(service.find_vehicle_by_id(id))?
                .ok_or_else(|| missing(NOT_FOUND, "vehicle", id.to_string()))?;
            let rows = vec![VehicleRow::new(&vehicle, &model_labels(conn)?)];
            render(&vehicle, rows, json)
        }
        EntityAction::Add { input } => {
            let draft = input.validate()?;
            saved(service.create_vehicle(&draft))
        }
        EntityAction::Edit { id, input } => {
            let stored = read(service.find_vehicle_by_id(id))?
                .ok_or_else(|| missing(SAVE_FAILED, "vehicle", id.to_string()))?;
            let draft = input.or_stored(&stored).validate()?;
            saved(service.modify_vehicle(id, &draft))
        }
        EntityAction::Delete { id } => deleted(service.remove_vehicle(id)),
    }
}
