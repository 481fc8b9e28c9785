use agenda_core::{validate, Event, EventStore};
use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Prompt for date, time and name, validate each, then append.
///
/// A validation failure reports and aborts the whole operation; the store
/// is untouched and control returns to the menu.
pub fn run(store: &EventStore) -> Result<()> {
    let date = prompt("Enter date (YYYY-MM-DD)")?;
    if date.is_empty() {
        println!("{}", "Date cannot be empty.".red());
        return Ok(());
    }
    if !validate::validate_date(&date) {
        println!("{}", "Invalid date format. Please use YYYY-MM-DD.".red());
        return Ok(());
    }

    let time = prompt("Enter time (HH:MM)")?;
    if time.is_empty() {
        println!("{}", "Time cannot be empty.".red());
        return Ok(());
    }
    if !validate::validate_time(&time) {
        println!("{}", "Invalid time format. Please use HH:MM.".red());
        return Ok(());
    }

    let name = prompt("Enter event name")?;
    if name.is_empty() {
        println!("{}", "Event name cannot be empty.".red());
        return Ok(());
    }

    store.append(&Event::new(date, time, name))?;
    println!("{}", "✅ Event added successfully.".green());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}
