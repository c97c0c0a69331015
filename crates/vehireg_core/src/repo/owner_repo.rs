//! Owner repository contract and SQLite implementation.
//!
//! Owners have no uniqueness rule, so there is no existence probe. An owner
//! referenced by any ownership cannot be deleted.

use super::error::RepoResult;
use super::support::{delete_guarded, ensure_connection_ready, expect_changed, DependencyGuard};
use crate::model::owner::{Owner, OwnerDraft, OwnerId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "owner";

const OWNER_SELECT_SQL: &str = "SELECT
    id,
    last_name,
    first_name,
    address,
    postal_code,
    city
FROM owner";

const DELETE_GUARD: DependencyGuard = DependencyGuard {
    entity: ENTITY,
    dependent: "ownership",
    count_dependents_sql: "SELECT COUNT(*) FROM ownership WHERE owner_id = ?1;",
    delete_sql: "DELETE FROM owner WHERE id = ?1;",
};

/// Data access contract for owners.
pub trait OwnerRepository {
    fn list_owners(&self) -> RepoResult<Vec<Owner>>;
    fn create_owner(&self, draft: &OwnerDraft) -> RepoResult<OwnerId>;
    fn update_owner(&self, id: OwnerId, draft: &OwnerDraft) -> RepoResult<()>;
    fn delete_owner(&self, id: OwnerId) -> RepoResult<()>;
    fn get_owner(&self, id: OwnerId) -> RepoResult<Option<Owner>>;
}

/// SQLite-backed owner repository.
pub struct SqliteOwnerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOwnerRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OwnerRepository for SqliteOwnerRepository<'_> {
    fn list_owners(&self) -> RepoResult<Vec<Owner>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{OWNER_SELECT_SQL} ORDER BY id ASC;"))?;
        let owners = stmt
            .query_map([], parse_owner_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(owners)
    }

    fn create_owner(&self, draft: &OwnerDraft) -> RepoResult<OwnerId> {
        self.conn.execute(
            "INSERT INTO owner (last_name, first_name, address, postal_code, city)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.last_name.as_str(),
                draft.first_name.as_str(),
                draft.address.as_str(),
                draft.postal_code.as_str(),
                draft.city.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_owner(&self, id: OwnerId, draft: &OwnerDraft) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE owner
             SET
                last_name = ?1,
                first_name = ?2,
                address = ?3,
                postal_code = ?4,
                city = ?5
             WHERE id = ?6;",
            params![
                draft.last_name.as_str(),
                draft.first_name.as_str(),
                draft.address.as_str(),
                draft.postal_code.as_str(),
                draft.city.as_str(),
                id,
            ],
        )?;
        expect_changed(changed, ENTITY, id)
    }

    fn delete_owner(&self, id: OwnerId) -> RepoResult<()> {
        delete_guarded(self.conn, &DELETE_GUARD, id)
    }

    fn get_owner(&self, id: OwnerId) -> RepoResult<Option<Owner>> {
        let owner = self
            .conn
            .query_row(
                &format!("{OWNER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_owner_row,
            )
            .optional()?;
        Ok(owner)
    }
}

fn parse_owner_row(row: &Row<'_>) -> rusqlite::Result<Owner> {
    Ok(Owner {
        id: row.get("id")?,
        last_name: row.get("last_name")?,
        first_name: row.get("first_name")?,
        address: row.get("address")?,
        postal_code: row.get("postal_code")?,
        city: row.get("city")?,
    })
}
