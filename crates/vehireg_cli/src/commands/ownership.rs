use super::{
    deleted, label_or_dash, missing, read, render, saved, CommandResult, NOT_FOUND, SAVE_FAILED,
};
use crate::config::OwnershipAction;
use crate::form::format_date;
use rusqlite::Connection;
use std::collections::HashMap;
use tabled::Tabled;
use vehireg_core::{
    OwnerId, OwnerService, Ownership, OwnershipService, SqliteOwnerRepository,
    SqliteOwnershipRepository, SqliteVehicleRepository, VehicleId, VehicleService,
};

#[derive(Tabled)]
struct OwnershipRow {
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Start")]
    start_date: String,
    #[tabled(rename = "End")]
    end_date: String,
}

struct Labels {
    owners: HashMap<OwnerId, String>,
    vehicles: HashMap<VehicleId, String>,
}

impl Labels {
    fn load(conn: &Connection) -> CommandResult<Self> {
        let owners = OwnerService::new(read(SqliteOwnerRepository::try_new(conn))?);
        let vehicles = VehicleService::new(read(SqliteVehicleRepository::try_new(conn))?);
        Ok(Self {
            owners: read(owners.fetch_all_owners())?
                .into_iter()
                .map(|owner| (owner.id, owner.full_name()))
                .collect(),
            vehicles: read(vehicles.fetch_all_vehicles())?
                .into_iter()
                .map(|vehicle| (vehicle.id, vehicle.registration))
                .collect(),
        })
    }

    fn row(&self, ownership: &Ownership) -> OwnershipRow {
        OwnershipRow {
            owner: label_or_dash(self.owners.get(&ownership.owner_id)),
            vehicle: label_or_dash(self.vehicles.get(&ownership.vehicle_id)),
            start_date: format_date(ownership.start_date),
            end_date: ownership
                .end_date
                .map(format_date)
                .unwrap_or_else(|| label_or_dash(None)),
        }
    }
}

fn pair_key(owner_id: OwnerId, vehicle_id: VehicleId) -> String {
    format!("owner={owner_id} vehicle={vehicle_id}")
}

pub(super) fn run(
    conn: &Connection,
    action: OwnershipAction,
    json: bool,
) -> CommandResult<String> {
    let service = OwnershipService::new(read(SqliteOwnershipRepository::try_new(conn))?);
    match action {
        OwnershipAction::List => {
            let ownerships = read(service.fetch_all_ownerships())?;
            let labels = Labels::load(conn)?;
            let rows = ownerships.iter().map(|item| labels.row(item)).collect();
            render(&ownerships, rows, json)
        }
        OwnershipAction::Show { key } => {
            let (owner_id, vehicle_id) = key.validate()?;
            let ownership = read(service.find_ownership(owner_id, vehicle_id))?
                .ok_or_else(|| missing(NOT_FOUND, "ownership", pair_key(owner_id, vehicle_id)))?;
            let rows = vec![Labels::load(conn)?.row(&ownership)];
            render(&ownership, rows, json)
        }
        OwnershipAction::Add { input } => {
            let ownership = input.validate()?;
            saved(service.create_ownership(&ownership))
        }
        OwnershipAction::Edit { input } => {
            let (owner_id, vehicle_id) = input.key.validate()?;
            let stored = read(service.find_ownership(owner_id, vehicle_id))?.ok_or_else(|| {
                missing(SAVE_FAILED, "ownership", pair_key(owner_id, vehicle_id))
            })?;
            let ownership = input.or_stored(&stored).validate()?;
            saved(service.modify_ownership(&ownership))
        }
        OwnershipAction::Delete { key } => {
            let (owner_id, vehicle_id) = key.validate()?;
            deleted(service.remove_ownership(owner_id, vehicle_id))
        }
    }
}
