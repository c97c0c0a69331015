//! Vehicle model repository contract and SQLite implementation.
//!
//! # Invariants
//! - `(name, brand_id)` is unique; the same name may repeat across brands.
//! - A model referenced by any vehicle cannot be deleted.

use super::error::{RepoError, RepoResult};
use super::support::{
    delete_guarded, ensure_connection_ready, exists_excluding, expect_changed, DependencyGuard,
};
use crate::model::brand::BrandId;
use crate::model::vehicle_model::{ModelId, VehicleModel};
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "model";

const MODEL_SELECT_SQL: &str = "SELECT id, name, brand_id FROM model";

const DELETE_GUARD: DependencyGuard = DependencyGuard {
    entity: ENTITY,
    dependent: "vehicle",
    count_dependents_sql: "SELECT COUNT(*) FROM vehicle WHERE model_id = ?1;",
    delete_sql: "DELETE FROM model WHERE id = ?1;",
};

/// Data access contract for vehicle models.
pub trait VehicleModelRepository {
    fn list_models(&self) -> RepoResult<Vec<VehicleModel>>;
    /// Whether a model other than `exclude_id` already uses `name` under `brand_id`.
    fn model_exists(
        &self,
        name: &str,
        brand_id: BrandId,
        exclude_id: Option<ModelId>,
    ) -> RepoResult<bool>;
    fn create_model(&self, name: &str, brand_id: BrandId) -> RepoResult<ModelId>;
    fn update_model(&self, id: ModelId, name: &str, brand_id: BrandId) -> RepoResult<()>;
    fn delete_model(&self, id: ModelId) -> RepoResult<()>;
    fn get_model(&self, id: ModelId) -> RepoResult<Option<VehicleModel>>;
}

/// SQLite-backed vehicle model repository.
pub struct SqliteVehicleModelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVehicleModelRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl VehicleModelRepository for SqliteVehicleModelRepository<'_> {
    fn list_models(&self) -> RepoResult<Vec<VehicleModel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MODEL_SELECT_SQL} ORDER BY id ASC;"))?;
        let models = stmt
            .query_map([], parse_model_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(models)
    }

    fn model_exists(
        &self,
        name: &str,
        brand_id: BrandId,
        exclude_id: Option<ModelId>,
    ) -> RepoResult<bool> {
        exists_excluding(
            self.conn,
            "SELECT COUNT(*) FROM model WHERE name = ? AND brand_id = ?",
            vec![Value::Text(name.to_string()), Value::Integer(brand_id)],
            exclude_id,
        )
    }

    fn create_model(&self, name: &str, brand_id: BrandId) -> RepoResult<ModelId> {
        if self.model_exists(name, brand_id, None)? {
            return Err(duplicate(name, brand_id));
        }

        self.conn.execute(
            "INSERT INTO model (name, brand_id) VALUES (?1, ?2);",
            params![name, brand_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_model(&self, id: ModelId, name: &str, brand_id: BrandId) -> RepoResult<()> {
        if self.model_exists(name, brand_id, Some(id))? {
            return Err(duplicate(name, brand_id));
        }

        let changed = self.conn.execute(
            "UPDATE model SET name = ?1, brand_id = ?2 WHERE id = ?3;",
            params![name, brand_id, id],
        )?;
        expect_changed(changed, ENTITY, id)
    }

    fn delete_model(&self, id: ModelId) -> RepoResult<()> {
        delete_guarded(self.conn, &DELETE_GUARD, id)
    }

    fn get_model(&self, id: ModelId) -> RepoResult<Option<VehicleModel>> {
        let model = self
            .conn
            .query_row(
                &format!("{MODEL_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_model_row,
            )
            .optional()?;
        Ok(model)
    }
}

fn duplicate(name: &str, brand_id: BrandId) -> RepoError {
    RepoError::Duplicate {
        entity: ENTITY,
        key: format!("{name} (brand {brand_id})"),
    }
}

fn parse_model_row(row: &Row<'_>) -> rusqlite::Result<VehicleModel> {
    Ok(VehicleModel {
        id: row.get("id")?,
        name: row.get("name")?,
        brand_id: row.get("brand_id")?,
    })
}
