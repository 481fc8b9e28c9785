use agenda_core::EventStore;
use anyhow::Result;
use chrono::Local;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use crate::render;

/// Pick an event by its 1-based index, confirm, then rewrite the store
/// without it.
///
/// A non-numeric or out-of-range selection reports and aborts; declining
/// the confirmation leaves the store untouched.
pub fn run(store: &EventStore) -> Result<()> {
    let events = store.load()?;

    if events.is_empty() {
        println!();
        println!("{}", "No events to delete.".dimmed());
        return Ok(());
    }

    let now = Local::now().naive_local();

    println!();
    println!("{}", "--- Select an Event to Delete ---".bold());
    println!();
    println!("{}", render::table_header());
    println!("{}", render::table_rule());
    for (i, event) in events.iter().enumerate() {
        println!("{}", render::table_row(i + 1, event, event.status(now)));
    }

    println!();
    let input: String = Input::new()
        .with_prompt("Enter the number of the event to delete")
        .allow_empty(true)
        .interact_text()?;

    let choice: usize = match input.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("{}", "Please enter a valid number.".red());
            return Ok(());
        }
    };
    if !(1..=events.len()).contains(&choice) {
        println!("{}", "Invalid number.".red());
        return Ok(());
    }

    let target = &events[choice - 1];
    println!();
    println!("You are about to delete: {} - {}", target.date, target.name);

    let confirmed = Confirm::new()
        .with_prompt("Are you sure?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Deletion cancelled.".red());
        return Ok(());
    }

    store.delete_at(choice - 1)?;
    println!("{}", "✅ Event deleted successfully!".green());
    Ok(())
}
