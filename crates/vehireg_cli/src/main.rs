//! `vehireg` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the registration store.
//! - Print the command result and map failures to exit codes.

mod commands;
mod config;
mod form;

use clap::Parser;
use config::{Cli, Config};
use log::{error, info};
use std::process::ExitCode;
use vehireg_core::db::open_db;
use vehireg_core::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::resolve(&cli);

    // Logging is best effort; commands still run without it.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=cli_start module=cli status=error error_code={} db_path={}",
                err.error_code(),
                config.db_path.display()
            );
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        config.db_path.display()
    );

    match commands::run(&conn, cli.command, config.json) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Some(notice) = err.notice() {
                println!("{notice}");
            }
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
