//! Storage layer for the contact book
//!
//! Persists the address book as a single JSON snapshot with atomic writes
//! and automatic directory creation.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{load, save, SnapshotStore, SNAPSHOT_SCHEMA_VERSION};
