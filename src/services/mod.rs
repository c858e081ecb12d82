//! Service layer for the contact book
//!
//! The service layer sits between the command layer and the address book,
//! turning lookups into outcome values and recording changes in the audit log.

pub mod contact;

pub use contact::{
    AddContactOutcome, BirthdayLookup, BirthdayOutcome, ContactService, PhoneOutcome,
};
