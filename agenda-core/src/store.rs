//! The CSV event store.
//!
//! One flat file holds every event row. Add appends; delete rewrites the
//! whole file; read paths tolerate hand-edited content (blank rows, short
//! rows, a missing header, malformed fields).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Writer};

use crate::constants::{STORE_FILE, STORE_HEADER};
use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;

/// File-backed event store.
///
/// Owns the store path; constructed once in `main` and passed to each
/// operation.
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    /// Store at the fixed relative name in the working directory.
    pub fn default_path() -> Self {
        Self::new(STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event row, creating the file (and its header) if absent.
    ///
    /// The status column records the status at write time; read paths
    /// ignore it.
    pub fn append(&self, event: &Event) -> AgendaResult<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = Writer::from_writer(file);

        if needs_header {
            writer.write_record(STORE_HEADER)?;
        }
        write_row(&mut writer, event, Local::now().naive_local())?;
        writer.flush()?;
        Ok(())
    }

    /// Load every event row.
    ///
    /// Blank rows and rows with fewer than 3 fields are skipped; extra
    /// fields beyond the first three (the status column included) are
    /// ignored. The first row is skipped only when it actually is the
    /// header. A missing file yields an empty list.
    pub fn load(&self) -> AgendaResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut events = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            if i == 0 && is_header(&record) {
                continue;
            }
            if let Some(event) = parse_row(&record) {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Remove the event at `index` (zero-based into the loaded list) and
    /// rewrite the store. Returns the removed event.
    ///
    /// The rewrite goes to a temporary sibling file which is renamed over
    /// the store, so the caller observes all-or-nothing.
    pub fn delete_at(&self, index: usize) -> AgendaResult<Event> {
        let mut events = self.load()?;
        if index >= events.len() {
            return Err(AgendaError::IndexOutOfRange {
                index,
                len: events.len(),
            });
        }
        let removed = events.remove(index);
        self.rewrite(&events)?;
        Ok(removed)
    }

    fn rewrite(&self, events: &[Event]) -> AgendaResult<()> {
        let tmp_path = self.path.with_extension("tmp");

        let mut writer = Writer::from_path(&tmp_path)?;
        writer.write_record(STORE_HEADER)?;
        let now = Local::now().naive_local();
        for event in events {
            write_row(&mut writer, event, now)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

fn write_row<W: std::io::Write>(
    writer: &mut Writer<W>,
    event: &Event,
    now: NaiveDateTime,
) -> AgendaResult<()> {
    let status = event.status(now).to_string();
    writer.write_record([
        event.date.as_str(),
        event.time.as_str(),
        event.name.as_str(),
        status.as_str(),
    ])?;
    Ok(())
}

/// The known header row, matched case-insensitively on its first fields.
fn is_header(record: &StringRecord) -> bool {
    record.len() >= 3
        && record
            .iter()
            .zip(STORE_HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

/// One record to one event; `None` for blank or short rows.
fn parse_row(record: &StringRecord) -> Option<Event> {
    if record.iter().all(|field| field.trim().is_empty()) {
        return None;
    }
    if record.len() < 3 {
        return None;
    }
    Some(Event::new(&record[0], &record[1], &record[2]))
}
