use agenda_core::EventStore;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render;

/// Tabular listing of every stored event with its live status.
pub fn run(store: &EventStore) -> Result<()> {
    let events = store.load()?;

    if events.is_empty() {
        println!();
        println!("{}", "📝 No events recorded yet.".dimmed());
        return Ok(());
    }

    let now = Local::now().naive_local();

    println!();
    println!("{}", "--- All Events ---".bold());
    println!("{}", render::table_header());
    println!("{}", render::table_rule());
    for (i, event) in events.iter().enumerate() {
        println!("{}", render::table_row(i + 1, event, event.status(now)));
    }

    let summary = format!("{} {}", events.len(), render::pluralize("event", events.len()));
    println!();
    println!("{}", summary.dimmed());
    Ok(())
}
