use agenda_core::{Event, EventStatus, EventStore};
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render;

/// Listing restricted to events that are still ahead of the clock.
///
/// Rows are renumbered for this listing; the numbers do not correspond to
/// delete indices.
pub fn run(store: &EventStore) -> Result<()> {
    let events = store.load()?;
    let now = Local::now().naive_local();

    let upcoming: Vec<&Event> = events
        .iter()
        .filter(|e| e.status(now) == EventStatus::Upcoming)
        .collect();

    if upcoming.is_empty() {
        println!();
        println!("{}", "📝 No upcoming events found.".dimmed());
        return Ok(());
    }

    println!();
    println!("{}", "--- Upcoming Events ---".bold());
    println!("{}", render::table_header());
    println!("{}", render::table_rule());
    for (i, event) in upcoming.iter().enumerate() {
        println!("{}", render::table_row(i + 1, event, EventStatus::Upcoming));
    }
    Ok(())
}
