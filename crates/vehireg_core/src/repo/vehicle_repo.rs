//! Vehicle repository contract and SQLite implementation.
//!
//! # Invariants
//! - Registration codes are unique across all vehicles, whatever the model.
//! - Numeric fields are persisted as given; no range validation here.
//! - A vehicle referenced by any ownership cannot be deleted.

use super::error::{RepoError, RepoResult};
use super::support::{
    delete_guarded, ensure_connection_ready, exists_excluding, expect_changed, DependencyGuard,
};
use crate::model::vehicle::{Vehicle, VehicleDraft, VehicleId};
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "vehicle";

const VEHICLE_SELECT_SQL: &str = "SELECT
    id,
    registration,
    model_year,
    weight,
    horsepower,
    fiscal_power,
    model_id
FROM vehicle";

const DELETE_GUARD: DependencyGuard = DependencyGuard {
    entity: ENTITY,
    dependent: "ownership",
    count_dependents_sql: "SELECT COUNT(*) FROM ownership WHERE vehicle_id = ?1;",
    delete_sql: "DELETE FROM vehicle WHERE id = ?1;",
};

/// Data access contract for vehicles.
pub trait VehicleRepository {
    fn list_vehicles(&self) -> RepoResult<Vec<Vehicle>>;
    /// Whether a vehicle other than `exclude_id` already uses `registration`.
    fn vehicle_exists(&self, registration: &str, exclude_id: Option<VehicleId>)
        -> RepoResult<bool>;
    fn create_vehicle(&self, draft: &VehicleDraft) -> RepoResult<VehicleId>;
    fn update_vehicle(&self, id: VehicleId, draft: &VehicleDraft) -> RepoResult<()>;
    fn delete_vehicle(&self, id: VehicleId) -> RepoResult<()>;
    fn get_vehicle(&self, id: VehicleId) -> RepoResult<Option<Vehicle>>;
}

/// SQLite-backed vehicle repository.
pub struct SqliteVehicleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVehicleRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl VehicleRepository for SqliteVehicleRepository<'_> {
    fn list_vehicles(&self) -> RepoResult<Vec<Vehicle>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VEHICLE_SELECT_SQL} ORDER BY id ASC;"))?;
        let vehicles = stmt
            .query_map([], parse_vehicle_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vehicles)
    }

    fn vehicle_exists(
        &self,
        registration: &str,
        exclude_id: Option<VehicleId>,
    ) -> RepoResult<bool> {
        exists_excluding(
            self.conn,
            "SELECT COUNT(*) FROM vehicle WHERE registration = ?",
            vec![Value::Text(registration.to_string())],
            exclude_id,
        )
    }

    fn create_vehicle(&self, draft: &VehicleDraft) -> RepoResult<VehicleId> {
        if self.vehicle_exists(&draft.registration, None)? {
            return Err(duplicate(&draft.registration));
        }

        self.conn.execute(
            "INSERT INTO vehicle (
                registration,
                model_year,
                weight,
                horsepower,
                fiscal_power,
                model_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.registration.as_str(),
                draft.model_year,
                draft.weight,
                draft.horsepower,
                draft.fiscal_power,
                draft.model_id,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_vehicle(&self, id: VehicleId, draft: &VehicleDraft) -> RepoResult<()> {
        if self.vehicle_exists(&draft.registration, Some(id))? {
            return Err(duplicate(&draft.registration));
        }

        let changed = self.conn.execute(
            "UPDATE vehicle
             SET
                registration = ?1,
                model_year = ?2,
                weight = ?3,
                horsepower = ?4,
                fiscal_power = ?5,
                model_id = ?6
             WHERE id = ?7;",
            params![
                draft.registration.as_str(),
                draft.model_year,
                draft.weight,
                draft.horsepower,
                draft.fiscal_power,
                draft.model_id,
                id,
            ],
        )?;
        expect_changed(changed, ENTITY, id)
    }

    fn delete_vehicle(&self, id: VehicleId) -> RepoResult<()> {
        delete_guarded(self.conn, &DELETE_GUARD, id)
    }

    fn get_vehicle(&self, id: VehicleId) -> RepoResult<Option<Vehicle>> {
        let vehicle = self
            .conn
            .query_row(
                &format!("{VEHICLE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_vehicle_row,
            )
            .optional()?;
        Ok(vehicle)
    }
}

fn duplicate(registration: &str) -> RepoError {
    RepoError::Duplicate {
        entity: ENTITY,
        key: registration.to_string(),
    }
}

fn parse_vehicle_row(row: &Row<'_>) -> rusqlite::Result<Vehicle> {
    Ok(Vehicle {
        id: row.get("id")?,
        registration: row.get("registration")?,
        model_year: row.get("model_year")?,
        weight: row.get("weight")?,
        horsepower: row.get("horsepower")?,
        fiscal_power: row.get("fiscal_power")?,
        model_id: row.get("model_id")?,
    })
}
