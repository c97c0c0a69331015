//! Ownership repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist owner/vehicle links keyed by the `(owner_id, vehicle_id)` pair.
//! - Own date encoding for `start_date`/`end_date` (ISO `YYYY-MM-DD` text).
//!
//! # Invariants
//! - At most one row per pair; checked before insert, not by the schema.
//! - Update and delete require the pair to be present.
//! - A failed delete statement rolls back and surfaces as `RepoError::Db`,
//!   the same policy as every other repository delete.

use super::error::{RepoError, RepoResult};
use super::support::ensure_connection_ready;
use crate::model::owner::OwnerId;
use crate::model::ownership::Ownership;
use crate::model::vehicle::VehicleId;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const ENTITY: &str = "ownership";
const DATE_FORMAT: &str = "%Y-%m-%d";

const OWNERSHIP_SELECT_SQL: &str = "SELECT
    owner_id,
    vehicle_id,
    start_date,
    end_date
FROM ownership";

/// Data access contract for ownership links.
pub trait OwnershipRepository {
    fn list_ownerships(&self) -> RepoResult<Vec<Ownership>>;
    fn ownership_exists(&self, owner_id: OwnerId, vehicle_id: VehicleId) -> RepoResult<bool>;
    fn create_ownership(&self, ownership: &Ownership) -> RepoResult<()>;
    /// Replaces both dates of the pair carried by `ownership`.
    fn update_ownership(&self, ownership: &Ownership) -> RepoResult<()>;
    fn delete_ownership(&self, owner_id: OwnerId, vehicle_id: VehicleId) -> RepoResult<()>;
    fn get_ownership(
        &self,
        owner_id: OwnerId,
        vehicle_id: VehicleId,
    ) -> RepoResult<Option<Ownership>>;
}

/// SQLite-backed ownership repository.
pub struct SqliteOwnershipRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOwnershipRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OwnershipRepository for SqliteOwnershipRepository<'_> {
    fn list_ownerships(&self) -> RepoResult<Vec<Ownership>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{OWNERSHIP_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut ownerships = Vec::new();
        while let Some(row) = rows.next()? {
            ownerships.push(parse_ownership_row(row)?);
        }
        Ok(ownerships)
    }

    fn ownership_exists(&self, owner_id: OwnerId, vehicle_id: VehicleId) -> RepoResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM ownership WHERE owner_id = ?1 AND vehicle_id = ?2;",
            params![owner_id, vehicle_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn create_ownership(&self, ownership: &Ownership) -> RepoResult<()> {
        if self.ownership_exists(ownership.owner_id, ownership.vehicle_id)? {
            return Err(RepoError::Duplicate {
                entity: ENTITY,
                key: pair_key(ownership.owner_id, ownership.vehicle_id),
            });
        }

        self.conn.execute(
            "INSERT INTO ownership (owner_id, vehicle_id, start_date, end_date)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                ownership.owner_id,
                ownership.vehicle_id,
                date_to_db(ownership.start_date),
                ownership.end_date.map(date_to_db),
            ],
        )?;
        Ok(())
    }

    fn update_ownership(&self, ownership: &Ownership) -> RepoResult<()> {
        if !self.ownership_exists(ownership.owner_id, ownership.vehicle_id)? {
            return Err(not_found(ownership.owner_id, ownership.vehicle_id));
        }

        let changed = self.conn.execute(
            "UPDATE ownership
             SET start_date = ?1, end_date = ?2
             WHERE owner_id = ?3 AND vehicle_id = ?4;",
            params![
                date_to_db(ownership.start_date),
                ownership.end_date.map(date_to_db),
                ownership.owner_id,
                ownership.vehicle_id,
            ],
        )?;
        if changed == 0 {
            return Err(not_found(ownership.owner_id, ownership.vehicle_id));
        }
        Ok(())
    }

    fn delete_ownership(&self, owner_id: OwnerId, vehicle_id: VehicleId) -> RepoResult<()> {
        if !self.ownership_exists(owner_id, vehicle_id)? {
            return Err(not_found(owner_id, vehicle_id));
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let deleted = match tx.execute(
            "DELETE FROM ownership WHERE owner_id = ?1 AND vehicle_id = ?2;",
            params![owner_id, vehicle_id],
        ) {
            Ok(deleted) => deleted,
            Err(err) => {
                tx.rollback()?;
                return Err(err.into());
            }
        };

        if deleted == 0 {
            tx.rollback()?;
            return Err(not_found(owner_id, vehicle_id));
        }

        tx.commit()?;
        Ok(())
    }

    fn get_ownership(
        &self,
        owner_id: OwnerId,
        vehicle_id: VehicleId,
    ) -> RepoResult<Option<Ownership>> {
        let mut stmt = self.conn.prepare(&format!(
            "{OWNERSHIP_SELECT_SQL} WHERE owner_id = ?1 AND vehicle_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![owner_id, vehicle_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_ownership_row(row)?));
        }
        Ok(None)
    }
}

fn pair_key(owner_id: OwnerId, vehicle_id: VehicleId) -> String {
    format!("owner={owner_id} vehicle={vehicle_id}")
}

fn not_found(owner_id: OwnerId, vehicle_id: VehicleId) -> RepoError {
    RepoError::NotFound {
        entity: ENTITY,
        key: pair_key(owner_id, vehicle_id),
    }
}

fn parse_ownership_row(row: &Row<'_>) -> RepoResult<Ownership> {
    let start_text: String = row.get("start_date")?;
    let start_date = parse_date(&start_text, "start_date")?;
    let end_date = match row.get::<_, Option<String>>("end_date")? {
        Some(value) => Some(parse_date(&value, "end_date")?),
        None => None,
    };

    Ok(Ownership {
        owner_id: row.get("owner_id")?,
        vehicle_id: row.get("vehicle_id")?,
        start_date,
        end_date,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(value: &str, column: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date `{value}` in ownership.{column}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::{date_to_db, parse_date};
    use crate::repo::error::RepoError;
    use chrono::NaiveDate;

    #[test]
    fn dates_are_stored_as_iso_text() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 9).expect("valid date");
        assert_eq!(date_to_db(date), "2021-03-09");
        assert_eq!(parse_date("2021-03-09", "start_date").expect("parse"), date);
    }

    #[test]
    fn malformed_stored_date_is_invalid_data() {
        let err = parse_date("09/03/2021", "end_date").expect_err("must reject");
        assert!(matches!(err, RepoError::InvalidData(message) if message.contains("end_date")));
    }
}
