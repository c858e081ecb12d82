//! Core data models for the contact book
//!
//! This module contains the validated field types (phone numbers and
//! birthdays), the contact record, and the address book that owns them.

pub mod address_book;
pub mod birthday;
pub mod phone;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use birthday::Birthday;
pub use phone::PhoneNumber;
pub use record::Record;
