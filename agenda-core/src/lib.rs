//! Core types for the agenda planner.
//!
//! This crate provides everything the CLI dispatches to:
//! - `Event` and `EventStatus` types
//! - field validators and live status derivation
//! - the CSV-backed `EventStore`

pub mod constants;
pub mod error;
pub mod event;
pub mod status;
pub mod store;
pub mod validate;

// Re-export the types commands touch on every operation
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventStatus};
pub use store::EventStore;
