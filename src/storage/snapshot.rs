//! Address book snapshot
//!
//! The whole address book is persisted as a single JSON document:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "contacts": [
//!     { "name": "Ann", "phones": ["0123456789"], "birthday": "14.06.1990" }
//!   ]
//! }
//! ```
//!
//! Loading either yields a fully valid [`AddressBook`] or fails with
//! [`ContactError::CorruptSnapshot`]; a partially restored book is never
//! returned.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ContactError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Snapshot format version written by this build
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    schema_version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct SnapshotIn {
    schema_version: u32,
    contacts: Vec<Record>,
}

/// Write the full address book to `path`, replacing any previous snapshot
pub fn save(book: &AddressBook, path: &Path) -> Result<(), ContactError> {
    let snapshot = SnapshotOut {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        contacts: book.records().collect(),
    };

    write_json_atomic(path, &snapshot)?;
    info!(path = %path.display(), contacts = book.len(), "saved address book");
    Ok(())
}

/// Restore an address book from `path`
///
/// A missing file yields an empty book.
pub fn load(path: &Path) -> Result<AddressBook, ContactError> {
    let Some(snapshot) = read_json::<SnapshotIn, _>(path)? else {
        debug!(path = %path.display(), "no snapshot yet, starting empty");
        return Ok(AddressBook::new());
    };

    if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
        return Err(ContactError::CorruptSnapshot(format!(
            "{}: unsupported schema version {}",
            path.display(),
            snapshot.schema_version
        )));
    }

    let mut book = AddressBook::new();
    for record in snapshot.contacts {
        if !record.has_unique_phones() {
            return Err(ContactError::CorruptSnapshot(format!(
                "{}: contact \"{}\" has duplicate phone numbers",
                path.display(),
                record.name()
            )));
        }

        let name = record.name().to_string();
        if !book.add_record(record) {
            return Err(ContactError::CorruptSnapshot(format!(
                "{}: duplicate contact \"{}\"",
                path.display(),
                name
            )));
        }
    }

    info!(path = %path.display(), contacts = book.len(), "loaded address book");
    Ok(book)
}

/// Snapshot location bound to a path
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything has been saved here yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<AddressBook, ContactError> {
        load(&self.path)
    }

    pub fn save(&self, book: &AddressBook) -> Result<(), ContactError> {
        save(book, &self.path)
    }
}
