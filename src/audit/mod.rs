//! Audit logging for the contact book
//!
//! Records every change to the address book in an append-only JSONL file:
//! contacts created and deleted, phones added, changed and removed, and
//! birthdays set.
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(EntityType::Phone, "Ann", &phone))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
