//! Repository error taxonomy.
//!
//! Callers can tell a transport failure from a rule violation from a missing
//! row without parsing messages.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by every repository operation.
#[derive(Debug)]
pub enum RepoError {
    /// SQLite transport or statement failure.
    Db(DbError),
    /// Update/delete target is absent.
    NotFound { entity: &'static str, key: String },
    /// A uniqueness rule would be broken by the write.
    Duplicate { entity: &'static str, key: String },
    /// Delete blocked by rows that still reference the target.
    HasDependents {
        entity: &'static str,
        key: String,
        dependent: &'static str,
        count: i64,
    },
    /// Connection was not migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Persisted row cannot be decoded into a record.
    InvalidData(String),
}

impl RepoError {
    /// Stable machine-readable code used in log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Db(err) => err.error_code(),
            Self::NotFound { .. } => "not_found",
            Self::Duplicate { .. } => "duplicate",
            Self::HasDependents { .. } => "has_dependents",
            Self::UninitializedConnection { .. } => "uninitialized_connection",
            Self::InvalidData(_) => "invalid_data",
        }
    }

    /// True for uniqueness and referential-integrity rejections.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::HasDependents { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, key } => write!(f, "{entity} not found: {key}"),
            Self::Duplicate { entity, key } => write!(f, "{entity} already exists: {key}"),
            Self::HasDependents {
                entity,
                key,
                dependent,
                count,
            } => write!(
                f,
                "{entity} {key} is still referenced by {count} {dependent} row(s)"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

#[cfg(test)]
mod tests {
    use super::RepoError;

    #[test]
    fn constraint_violations_are_grouped() {
        let duplicate = RepoError::Duplicate {
            entity: "brand",
            key: "Renault".to_string(),
        };
        let blocked = RepoError::HasDependents {
            entity: "brand",
            key: "1".to_string(),
            dependent: "model",
            count: 2,
        };
        let missing = RepoError::NotFound {
            entity: "brand",
            key: "9".to_string(),
        };

        assert!(duplicate.is_constraint_violation());
        assert!(blocked.is_constraint_violation());
        assert!(!missing.is_constraint_violation());
        assert!(missing.is_not_found());
        assert_eq!(blocked.error_code(), "has_dependents");
        assert_eq!(
            blocked.to_string(),
            "brand 1 is still referenced by 2 model row(s)"
        );
    }
}
