//! reserve-cli: an interactive manager for restaurant reservations backed by
//! a comma-delimited file.

mod cli;
mod config;
mod reservation;
mod store;

use std::process::ExitCode;

use colored::*;

use crate::config::StoreConfig;
use crate::store::ReservationStore;

fn main() -> ExitCode {
    env_logger::init();

    let config = StoreConfig::default();
    let (mut store, report) = ReservationStore::load(config);

    // The menu loop never exits the process itself; termination happens here.
    match cli::run(&mut store, report) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Error: {err:#}").red());
            ExitCode::FAILURE
        }
    }
}
