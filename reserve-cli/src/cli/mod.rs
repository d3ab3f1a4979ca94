//! Interactive menu loop
//!
//! Every handler reports store errors and returns to the menu; nothing here
//! terminates the process. The loop only returns, and the caller decides
//! what exiting means.

mod prompts;

use anyhow::Result;
use colored::*;

use crate::store::{LoadReport, ReservationStore, StoreError};

/// What the user picked from the main menu.
enum MenuChoice {
    Add,
    View,
    Cancel,
    Update,
    Exit,
}

/// Run the menu loop until the user chooses to exit.
pub fn run(store: &mut ReservationStore, report: LoadReport) -> Result<()> {
    if report.file_missing {
        println!(
            "{}",
            "No reservation file found, starting with an empty list.".dimmed()
        );
    }
    if report.skipped > 0 {
        println!(
            "{}",
            format!(
                "Warning: skipped {} malformed row(s) in the reservation file.",
                report.skipped
            )
            .yellow()
        );
    }

    loop {
        println!();
        match prompts::main_menu()? {
            MenuChoice::Add => handle_add(store)?,
            MenuChoice::View => handle_view(store),
            MenuChoice::Cancel => handle_cancel(store)?,
            MenuChoice::Update => handle_update(store)?,
            MenuChoice::Exit => {
                // One final rewrite so the file reflects the session even if
                // an earlier persist failed.
                if let Err(err) = store.persist() {
                    report_store_error(err);
                }
                println!("Exiting.");
                break;
            }
        }
    }
    Ok(())
}

fn handle_add(store: &mut ReservationStore) -> Result<()> {
    let name = prompts::customer_name()?;
    let party_size = prompts::party_size()?;
    let reservation_time = prompts::reservation_time()?;

    match store.add(&name, &party_size, &reservation_time) {
        Ok(()) => println!(
            "{}",
            format!(
                "Reservation added for {} (Party Size: {}) at {}.",
                name, party_size, reservation_time
            )
            .green()
        ),
        Err(err) => report_store_error(err),
    }
    Ok(())
}

fn handle_view(store: &ReservationStore) {
    let sorted = store.list_sorted();
    if sorted.is_empty() {
        println!("No reservations available.");
        return;
    }
    for (idx, reservation) in sorted.iter().enumerate() {
        println!("{}. {}", idx + 1, reservation);
    }
}

fn handle_cancel(store: &mut ReservationStore) -> Result<()> {
    handle_view(store);
    if store.is_empty() {
        return Ok(());
    }

    let position = prompts::position("cancel")?;
    match store.cancel(position) {
        Ok(removed) => println!(
            "{}",
            format!(
                "Canceled reservation for {} (Party Size: {}) at {}.",
                removed.name,
                removed.party_size,
                removed.time_display()
            )
            .green()
        ),
        Err(err) => report_store_error(err),
    }
    Ok(())
}

fn handle_update(store: &mut ReservationStore) -> Result<()> {
    handle_view(store);
    if store.is_empty() {
        return Ok(());
    }

    let position = prompts::position("update")?;
    let Some(current) = store.get_sorted(position).cloned() else {
        report_store_error(StoreError::InvalidPosition(position));
        return Ok(());
    };

    println!("Updating reservation for {}", current.name);
    let changes = prompts::update_fields(&current)?;

    match store.update(position, changes) {
        Ok(updated) => println!(
            "{}",
            format!(
                "Reservation updated for {} (Party Size: {}) at {}.",
                updated.name,
                updated.party_size,
                updated.time_display()
            )
            .green()
        ),
        Err(err) => report_store_error(err),
    }
    Ok(())
}

fn report_store_error(err: StoreError) {
    if err.is_persist() {
        log::error!("{err}");
        println!(
            "{}",
            format!("Warning: {err}. The change is kept for this session.").yellow()
        );
    } else {
        println!("{}", format!("Error: {err}").red());
    }
}
