//! Brand repository contract and SQLite implementation.
//!
//! # Invariants
//! - Brand names are unique; checked before every insert/update.
//! - A brand referenced by any model cannot be deleted.

use super::error::{RepoError, RepoResult};
use super::support::{
    delete_guarded, ensure_connection_ready, exists_excluding, expect_changed, DependencyGuard,
};
use crate::model::brand::{Brand, BrandId};
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "brand";

const BRAND_SELECT_SQL: &str = "SELECT id, name FROM brand";

const DELETE_GUARD: DependencyGuard = DependencyGuard {
    entity: ENTITY,
    dependent: "model",
    count_dependents_sql: "SELECT COUNT(*) FROM model WHERE brand_id = ?1;",
    delete_sql: "DELETE FROM brand WHERE id = ?1;",
};

/// Data access contract for brands.
pub trait BrandRepository {
    /// All brands in storage order.
    fn list_brands(&self) -> RepoResult<Vec<Brand>>;
    /// Whether a brand other than `exclude_id` already uses `name`.
    fn brand_exists(&self, name: &str, exclude_id: Option<BrandId>) -> RepoResult<bool>;
    fn create_brand(&self, name: &str) -> RepoResult<BrandId>;
    fn update_brand(&self, id: BrandId, name: &str) -> RepoResult<()>;
    fn delete_brand(&self, id: BrandId) -> RepoResult<()>;
    fn get_brand(&self, id: BrandId) -> RepoResult<Option<Brand>>;
}

/// SQLite-backed brand repository.
pub struct SqliteBrandRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBrandRepository<'conn> {
    /// Wraps a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl BrandRepository for SqliteBrandRepository<'_> {
    fn list_brands(&self) -> RepoResult<Vec<Brand>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BRAND_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut brands = Vec::new();
        while let Some(row) = rows.next()? {
            brands.push(parse_brand_row(row)?);
        }
        Ok(brands)
    }

    fn brand_exists(&self, name: &str, exclude_id: Option<BrandId>) -> RepoResult<bool> {
        exists_excluding(
            self.conn,
            "SELECT COUNT(*) FROM brand WHERE name = ?",
            vec![Value::Text(name.to_string())],
            exclude_id,
        )
    }

    fn create_brand(&self, name: &str) -> RepoResult<BrandId> {
        if self.brand_exists(name, None)? {
            return Err(RepoError::Duplicate {
                entity: ENTITY,
                key: name.to_string(),
            });
        }

        self.conn
            .execute("INSERT INTO brand (name) VALUES (?1);", [name])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_brand(&self, id: BrandId, name: &str) -> RepoResult<()> {
        if self.brand_exists(name, Some(id))? {
            return Err(RepoError::Duplicate {
                entity: ENTITY,
                key: name.to_string(),
            });
        }

        let changed = self.conn.execute(
            "UPDATE brand SET name = ?1 WHERE id = ?2;",
            params![name, id],
        )?;
        expect_changed(changed, ENTITY, id)
    }

    fn delete_brand(&self, id: BrandId) -> RepoResult<()> {
        delete_guarded(self.conn, &DELETE_GUARD, id)
    }

    fn get_brand(&self, id: BrandId) -> RepoResult<Option<Brand>> {
        let brand = self
            .conn
            .query_row(&format!("{BRAND_SELECT_SQL} WHERE id = ?1;"), [id], |row| {
                parse_brand_row(row)
            })
            .optional()?;
        Ok(brand)
    }
}

fn parse_brand_row(row: &Row<'_>) -> rusqlite::Result<Brand> {
    Ok(Brand {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
