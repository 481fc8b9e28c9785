//! Terminal rendering for events and their status.
//!
//! Extension trait plus the fixed-width table pieces shared by the listing
//! commands.

use agenda_core::{Event, EventStatus};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let text = self.to_string();
        match self {
            EventStatus::Upcoming => text.green().to_string(),
            EventStatus::Overdue => text.red().to_string(),
            EventStatus::Unknown => text.yellow().to_string(),
        }
    }
}

/// Column header shared by the listing tables.
pub fn table_header() -> String {
    format!(
        "{:<4} {:<12} {:<6} {:<25} {}",
        "No.", "Date", "Time", "Event Name", "Status"
    )
}

/// Horizontal rule under the header.
pub fn table_rule() -> String {
    "-".repeat(65)
}

/// One table row with a 1-based index and live status.
pub fn table_row(index: usize, event: &Event, status: EventStatus) -> String {
    format!(
        "{:<4} {:<12} {:<6} {:<25} {}",
        index,
        event.date,
        event.time,
        event.name,
        status.render()
    )
}

/// Simple pluralization helper.
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            _ => word,
        }
    }
}
