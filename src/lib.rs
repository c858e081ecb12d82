//! Contact Book - terminal contact manager with birthday reminders
//!
//! This library provides the core functionality for the `contacts` binary:
//! validated contact records, an address book with an upcoming-birthday
//! query, JSON snapshot persistence, and the interactive command shell.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Phone numbers, birthdays, records and the address book
//! - `storage`: JSON snapshot storage with atomic writes
//! - `services`: Contact operations with audit logging
//! - `audit`: Append-only audit log
//! - `cli`: Interactive command parsing and the shell loop
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use contacts::models::{AddressBook, Record};
//!
//! let mut ann = Record::new("Ann");
//! ann.add_phone("0123456789").unwrap();
//! ann.add_birthday("15.06.1990").unwrap();
//!
//! let mut book = AddressBook::new();
//! assert!(book.add_record(ann));
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let upcoming = book.get_upcoming_birthdays(monday);
//! assert_eq!(upcoming[0].formatted_date(), "17.06.2024");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactError, ContactResult};
