//! Command dispatch for the registration CLI.
//!
//! # Responsibility
//! - Map each entity action to its use-case call.
//! - Collapse use-case failures into the short user notices.
//!
//! # Invariants
//! - Form validation runs before any use-case call.
//! - Failure causes are logged and never replace the notice on stdout.

mod brand;
mod model;
mod owner;
mod ownership;
mod vehicle;

use crate::config::Command;
use crate::form::FormError;
use log::warn;
use rusqlite::Connection;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use vehireg_core::{RepoError, RepoResult};

pub const SAVED: &str = "Saved.";
pub const SAVE_FAILED: &str = "Error or duplicate!";
pub const DELETED: &str = "Deleted.";
pub const DELETE_FAILED: &str = "Error!";
pub const READ_FAILED: &str = "Error!";
pub const NOT_FOUND: &str = "Not found.";

/// Why a command did not complete.
#[derive(Debug)]
pub enum CommandError {
    /// Input rejected before reaching the store.
    Form(FormError),
    /// The store refused or failed the operation.
    Failed {
        notice: &'static str,
        cause: RepoError,
    },
    /// Records could not be rendered as JSON.
    Output(serde_json::Error),
}

impl CommandError {
    /// Process exit code: `2` for input errors, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Form(_) => 2,
            Self::Failed { .. } | Self::Output(_) => 1,
        }
    }

    /// Short message printed to stdout, when the action has one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Failed { notice, .. } => Some(*notice),
            Self::Form(_) | Self::Output(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Form(_) => "invalid_input",
            Self::Failed { cause, .. } => cause.error_code(),
            Self::Output(_) => "output_failed",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Failed { cause, .. } => write!(f, "{cause}"),
            Self::Output(err) => write!(f, "cannot render output: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Failed { cause, .. } => Some(cause),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<FormError> for CommandError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Runs one parsed command against `conn` and returns the text to print.
pub fn run(conn: &Connection, command: Command, json: bool) -> CommandResult<String> {
    let (entity, result) = match command {
        Command::Brand { action } => ("brand", brand::run(conn, action, json)),
        Command::Model { action } => ("model", model::run(conn, action, json)),
        Command::Vehicle { action } => ("vehicle", vehicle::run(conn, action, json)),
        Command::Owner { action } => ("owner", owner::run(conn, action, json)),
        Command::Ownership { action } => ("ownership", ownership::run(conn, action, json)),
    };
    if let Err(err) = &result {
        warn!(
            "event=cli_command module=cli status=error entity={entity} error_code={}",
            err.error_code()
        );
    }
    result
}

fn saved<T>(result: RepoResult<T>) -> CommandResult<String> {
    result
        .map(|_| SAVED.to_string())
        .map_err(|cause| CommandError::Failed {
            notice: SAVE_FAILED,
            cause,
        })
}

fn deleted(result: RepoResult<()>) -> CommandResult<String> {
    result
        .map(|()| DELETED.to_string())
        .map_err(|cause| CommandError::Failed {
            notice: DELETE_FAILED,
            cause,
        })
}

fn read<T>(result: RepoResult<T>) -> CommandResult<T> {
    result.map_err(|cause| CommandError::Failed {
        notice: READ_FAILED,
        cause,
    })
}

fn missing(notice: &'static str, entity: &'static str, key: String) -> CommandError {
    CommandError::Failed {
        notice,
        cause: RepoError::NotFound { entity, key },
    }
}

/// Renders `records` as JSON, or their display `rows` as a table.
fn render<T, D>(records: &T, rows: Vec<D>, json: bool) -> CommandResult<String>
where
    T: Serialize + ?Sized,
    D: Tabled,
{
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    Ok(table.to_string())
}

/// Label used when a joined record is missing.
fn label_or_dash(label: Option<&String>) -> String {
    label.cloned().unwrap_or_else(|| "-".to_string())
}
