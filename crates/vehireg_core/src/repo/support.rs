//! SQL helpers shared by the entity repositories.
//!
//! # Invariants
//! - Dependency-guarded deletes run check and delete in one `IMMEDIATE`
//!   transaction; any early exit rolls back explicitly.
//! - The only dynamic SQL is the appended `exclude_id` clause.

use super::error::{RepoError, RepoResult};
use crate::db::migrations::{current_version, latest_version};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Transaction, TransactionBehavior};

/// Check-then-delete plan for an entity that other tables reference.
pub(crate) struct DependencyGuard {
    pub entity: &'static str,
    pub dependent: &'static str,
    /// Single `?1` parameter: the id being deleted.
    pub count_dependents_sql: &'static str,
    /// Single `?1` parameter: the id being deleted.
    pub delete_sql: &'static str,
}

/// Rejects connections that are not at the schema version this build expects.
pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

/// Runs a `SELECT COUNT(*) ...` uniqueness probe, optionally skipping one id.
///
/// `base_sql` must end with its `WHERE` predicate so that `AND id <> ?` can be
/// appended; `bind_values` covers the placeholders of `base_sql` in order.
pub(crate) fn exists_excluding(
    conn: &Connection,
    base_sql: &str,
    mut bind_values: Vec<Value>,
    exclude_id: Option<i64>,
) -> RepoResult<bool> {
    let mut sql = base_sql.to_string();
    if let Some(id) = exclude_id {
        sql.push_str(" AND id <> ?");
        bind_values.push(Value::Integer(id));
    }

    let count: i64 = conn.query_row(&sql, params_from_iter(bind_values), |row| row.get(0))?;
    Ok(count > 0)
}

/// Deletes one row by id unless dependents reference it.
pub(crate) fn delete_guarded(conn: &Connection, guard: &DependencyGuard, id: i64) -> RepoResult<()> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

    let dependents: i64 = tx.query_row(guard.count_dependents_sql, [id], |row| row.get(0))?;
    if dependents > 0 {
        tx.rollback()?;
        return Err(RepoError::HasDependents {
            entity: guard.entity,
            key: id.to_string(),
            dependent: guard.dependent,
            count: dependents,
        });
    }

    let deleted = tx.execute(guard.delete_sql, [id])?;
    if deleted == 0 {
        tx.rollback()?;
        return Err(RepoError::NotFound {
            entity: guard.entity,
            key: id.to_string(),
        });
    }

    tx.commit()?;
    Ok(())
}

/// Maps a zero-row update to `NotFound`.
pub(crate) fn expect_changed(changed: usize, entity: &'static str, id: i64) -> RepoResult<()> {
    if changed == 0 {
        return Err(RepoError::NotFound {
            entity,
            key: id.to_string(),
        });
    }
    Ok(())
}
