//! Command-line surface and runtime configuration.
//!
//! Every global option can also come from a `VEHIREG_*` environment
//! variable. Paths default under the system temp directory.

use crate::form::{BrandInput, ModelInput, OwnerInput, OwnershipInput, OwnershipKeyInput, VehicleInput};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vehireg_core::default_log_level;

const DB_FILE_NAME: &str = "vehireg.sqlite3";
const LOG_DIR_NAME: &str = "vehireg-logs";

#[derive(Debug, Parser)]
#[command(name = "vehireg")]
#[command(author, version, about = "Vehicle registration records", long_about = None)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "VEHIREG_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "VEHIREG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "VEHIREG_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage brands
    Brand {
        #[command(subcommand)]
        action: EntityAction<BrandInput>,
    },
    /// Manage vehicle models
    Model {
        #[command(subcommand)]
        action: EntityAction<ModelInput>,
    },
    /// Manage vehicles
    Vehicle {
        #[command(subcommand)]
        action: EntityAction<VehicleInput>,
    },
    /// Manage owners
    Owner {
        #[command(subcommand)]
        action: EntityAction<OwnerInput>,
    },
    /// Manage ownership periods
    Ownership {
        #[command(subcommand)]
        action: OwnershipAction,
    },
}

/// Actions shared by entities keyed by a numeric id.
#[derive(Debug, Subcommand)]
pub enum EntityAction<I: clap::Args> {
    /// List all records
    List,
    /// Show one record
    Show { id: i64 },
    /// Add a record
    Add {
        #[command(flatten)]
        input: I,
    },
    /// Edit a record; omitted fields keep their stored value
    Edit {
        id: i64,
        #[command(flatten)]
        input: I,
    },
    /// Delete a record
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum OwnershipAction {
    /// List all ownership periods
    List,
    /// Show one ownership period
    Show {
        #[command(flatten)]
        key: OwnershipKeyInput,
    },
    /// Add an ownership period
    Add {
        #[command(flatten)]
        input: OwnershipInput,
    },
    /// Edit the dates of an ownership period
    Edit {
        #[command(flatten)]
        input: OwnershipInput,
    },
    /// Delete an ownership period
    Delete {
        #[command(flatten)]
        key: OwnershipKeyInput,
    },
}

/// Settings resolved from flags, environment and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
    pub json: bool,
}

impl Config {
    pub fn resolve(cli: &Cli) -> Self {
        let temp_dir = std::env::temp_dir();
        Self {
            db_path: cli
                .db
                .clone()
                .unwrap_or_else(|| temp_dir.join(DB_FILE_NAME)),
            log_level: cli
                .log_level
                .clone()
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: absolute(
                &cli.log_dir
                    .clone()
                    .unwrap_or_else(|| temp_dir.join(LOG_DIR_NAME)),
            ),
            json: cli.json,
        }
    }
}

/// The logger only accepts absolute directories.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, Config, EntityAction, OwnershipAction};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "vehireg",
            "--db",
            "/tmp/cars.sqlite3",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/cars-logs",
            "brand",
            "list",
        ])
        .unwrap();
        let config = Config::resolve(&cli);
        assert_eq!(config.db_path, PathBuf::from("/tmp/cars.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/cars-logs"));
        assert!(!config.json);
    }

    #[test]
    fn relative_log_dir_is_made_absolute() {
        let cli = Cli::try_parse_from(["vehireg", "--log-dir", "logs", "owner", "list"]).unwrap();
        assert!(Config::resolve(&cli).log_dir.is_absolute());
    }

    #[test]
    fn add_parses_flattened_form_fields() {
        let cli = Cli::try_parse_from([
            "vehireg",
            "model",
            "add",
            "--name",
            "Clio",
            "--brand",
            "1",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Model {
                action: EntityAction::Add { input },
            } => {
                assert_eq!(input.name.as_deref(), Some("Clio"));
                assert_eq!(input.brand.as_deref(), Some("1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ownership_delete_takes_both_ids() {
        let cli = Cli::try_parse_from([
            "vehireg",
            "ownership",
            "delete",
            "--owner",
            "4",
            "--vehicle",
            "9",
        ])
        .unwrap();
        match cli.command {
            Command::Ownership {
                action: OwnershipAction::Delete { key },
            } => assert_eq!(key.validate().unwrap(), (4, 9)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
