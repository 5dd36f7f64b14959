//! Trigger-time computation for a scan-to-dismiss alarm clock.
//!
//! The crate turns a user's chosen time of day (or snooze length) into an
//! absolute instant for the platform alarm service, and turns instants back
//! into the fields and countdowns the UI displays. Everything reads "now"
//! through an injected [`Clock`](clock::Clock).

pub mod alarm;
pub mod clock;
pub mod config;
pub mod scheduler;
pub mod tracing;
pub mod types;
