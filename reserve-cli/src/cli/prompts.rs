//! Field prompts for the menu loop
//!
//! Party size and reservation time run the same validators the store applies,
//! so the prompt re-asks until the store would accept the value. The raw text
//! is still handed to the store, which validates again as part of its API.

use anyhow::Result;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use super::MenuChoice;
use crate::reservation::{Reservation, parse_party_size, parse_reservation_time};
use crate::store::ReservationUpdate;

pub(super) fn main_menu() -> Result<MenuChoice> {
    let items = [
        "1. Add Reservation",
        "2. View Reservations",
        "3. Cancel Reservation",
        "4. Update Reservation",
        "5. Exit",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Restaurant Reservation System")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => MenuChoice::Add,
        1 => MenuChoice::View,
        2 => MenuChoice::Cancel,
        3 => MenuChoice::Update,
        _ => MenuChoice::Exit,
    })
}

pub(super) fn customer_name() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Customer name")
        .interact_text()?;
    Ok(name)
}

pub(super) fn party_size() -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Party size")
        .validate_with(|input: &String| {
            parse_party_size(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(value)
}

pub(super) fn reservation_time() -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Reservation time (MM-DD-YYYY HH:MM)")
        .validate_with(|input: &String| {
            parse_reservation_time(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(value)
}

/// 1-based position in the currently displayed time-sorted list.
pub(super) fn position(action: &str) -> Result<usize> {
    let value: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Reservation number to {action}"))
        .interact_text()?;
    Ok(value)
}

/// Prompt each field; an empty answer keeps the current value.
pub(super) fn update_fields(current: &Reservation) -> Result<ReservationUpdate> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt(format!("New name (Enter keeps '{}')", current.name))
        .allow_empty(true)
        .interact_text()?;

    let party_size: String = Input::with_theme(&theme)
        .with_prompt(format!("New party size (Enter keeps {})", current.party_size))
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.is_empty() {
                Ok(())
            } else {
                parse_party_size(input).map(|_| ()).map_err(|e| e.to_string())
            }
        })
        .interact_text()?;

    let reservation_time: String = Input::with_theme(&theme)
        .with_prompt(format!(
            "New reservation time (Enter keeps '{}')",
            current.time_display()
        ))
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.is_empty() {
                Ok(())
            } else {
                parse_reservation_time(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }
        })
        .interact_text()?;

    Ok(ReservationUpdate {
        name: (!name.is_empty()).then_some(name),
        party_size: (!party_size.is_empty()).then_some(party_size),
        reservation_time: (!reservation_time.is_empty()).then_some(reservation_time),
    })
}
