//! Shared constants for the store layout and field formats.

/// Fixed relative path of the event store, resolved against the working directory.
pub const STORE_FILE: &str = "events.csv";

/// Header row written when the store file is created.
pub const STORE_HEADER: [&str; 4] = ["date", "time", "name", "status"];

/// Exact format accepted for event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exact format accepted for event times (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";

/// Combined format used when deriving an event's instant.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
