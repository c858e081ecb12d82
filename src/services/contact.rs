//! Contact service
//!
//! Provides the operations the front end invokes on the address book. Each
//! operation reports what happened through a small outcome enum, so missing
//! contacts and duplicates never surface as errors. Validation failures are
//! still returned as `Err`. Successful mutations are written to the audit log
//! when one is attached. The entry is written after the change is applied, so
//! an audit failure leaves the change in place and is returned as `Err`.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Birthday, PhoneNumber, Record, UpcomingBirthday};

/// Result of adding a phone to a possibly new contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddContactOutcome {
    /// A new contact was created with the phone
    Created,
    /// The phone was added to an existing contact
    Updated,
    /// The contact already has this phone
    DuplicatePhone,
}

/// Result of changing or removing one of a contact's phones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneOutcome {
    Updated,
    ContactNotFound,
    PhoneNotFound,
}

/// Result of setting a contact's birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayOutcome {
    Set,
    AlreadySet,
    ContactNotFound,
}

/// Result of looking up a contact's birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayLookup {
    Found(Birthday),
    NotSet,
    ContactNotFound,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ContactService<'a> {
    /// Create a service over `book` without audit logging
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book, audit: None }
    }

    /// Create a service that records every change in `audit`
    pub fn with_audit(book: &'a mut AddressBook, audit: &'a AuditLogger) -> Self {
        Self {
            book,
            audit: Some(audit),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &*self.book
    }

    /// Add `phone` to the contact `name`, creating the contact if needed
    ///
    /// The phone is validated before anything changes, so an invalid number
    /// never leaves behind an empty new contact.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<AddContactOutcome> {
        let phone = PhoneNumber::parse(phone)?;

        if !self.book.contains(name) {
            let mut record = Record::new(name);
            record.add_phone(phone.as_str())?;
            let entry = AuditEntry::create(EntityType::Contact, name, &record);
            self.book.add_record(record);
            debug!(contact = name, "created contact");
            self.record_change(entry)?;
            return Ok(AddContactOutcome::Created);
        }

        let added = self
            .book
            .find_mut(name)
            .map_or(Ok(false), |record| record.add_phone(phone.as_str()))?;

        if !added {
            return Ok(AddContactOutcome::DuplicatePhone);
        }

        debug!(contact = name, "added phone");
        self.record_change(AuditEntry::create(EntityType::Phone, name, &phone))?;
        Ok(AddContactOutcome::Updated)
    }

    /// Replace one of the contact's phones
    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> ContactResult<PhoneOutcome> {
        let Some(record) = self.book.find_mut(name) else {
            return Ok(PhoneOutcome::ContactNotFound);
        };

        if !record.edit_phone(old_phone, new_phone)? {
            return Ok(PhoneOutcome::PhoneNotFound);
        }

        debug!(contact = name, "changed phone");
        self.record_change(AuditEntry::update(EntityType::Phone, name, &old_phone, &new_phone))?;
        Ok(PhoneOutcome::Updated)
    }

    /// Remove one of the contact's phones
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<PhoneOutcome> {
        let Some(record) = self.book.find_mut(name) else {
            return Ok(PhoneOutcome::ContactNotFound);
        };

        if !record.remove_phone(phone) {
            return Ok(PhoneOutcome::PhoneNotFound);
        }

        debug!(contact = name, "removed phone");
        self.record_change(AuditEntry::delete(EntityType::Phone, name, &phone))?;
        Ok(PhoneOutcome::Updated)
    }

    /// The contact's phones, or `None` if there is no such contact
    pub fn phones(&self, name: &str) -> Option<&[PhoneNumber]> {
        self.book.find(name).map(Record::phones)
    }

    /// Set the contact's birthday once
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> ContactResult<BirthdayOutcome> {
        let Some(record) = self.book.find_mut(name) else {
            return Ok(BirthdayOutcome::ContactNotFound);
        };

        if !record.add_birthday(birthday)? {
            return Ok(BirthdayOutcome::AlreadySet);
        }

        let birthday = record.birthday().copied();
        debug!(contact = name, "set birthday");
        if let Some(birthday) = birthday {
            self.record_change(AuditEntry::create(EntityType::Birthday, name, &birthday))?;
        }
        Ok(BirthdayOutcome::Set)
    }

    pub fn birthday(&self, name: &str) -> BirthdayLookup {
        match self.book.find(name) {
            None => BirthdayLookup::ContactNotFound,
            Some(record) => match record.birthday() {
                Some(birthday) => BirthdayLookup::Found(*birthday),
                None => BirthdayLookup::NotSet,
            },
        }
    }

    /// Delete a contact and all its data
    pub fn delete_contact(&mut self, name: &str) -> ContactResult<bool> {
        let Some(record) = self.book.find(name).cloned() else {
            return Ok(false);
        };

        self.book.delete(name);
        debug!(contact = name, "deleted contact");
        self.record_change(AuditEntry::delete(EntityType::Contact, name, &record))?;
        Ok(true)
    }

    /// Contacts whose birthdays fall within `days` days of `reference`
    pub fn upcoming_birthdays(&self, reference: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        self.book.upcoming_birthdays_within(reference, days)
    }

    /// The last `count` audit entries, oldest first
    pub fn recent_changes(&self, count: usize) -> ContactResult<Vec<AuditEntry>> {
        match self.audit {
            Some(logger) => logger.read_recent(count),
            None => Ok(Vec::new()),
        }
    }

    fn record_change(&self, entry: AuditEntry) -> ContactResult<()> {
        let Some(logger) = self.audit else {
            return Ok(());
        };

        logger.log(&entry).map_err(|e| {
            warn!(error = %e, contact = %entry.contact, "audit entry not written");
            ContactError::Storage(format!("change applied but not audited: {}", e))
        })
    }
}
