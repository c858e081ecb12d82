//! Contact record
//!
//! A record is one contact: an immutable name, an ordered list of unique
//! phone numbers, and an optional birthday that can be set once.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::phone::PhoneNumber;
use crate::error::ContactError;

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,

    /// Phones in insertion order, unique by value
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Contact name (the address book key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number
    ///
    /// Returns `Ok(false)` without changes if the number is already present.
    pub fn add_phone(&mut self, raw: &str) -> Result<bool, ContactError> {
        if self.position_of(raw).is_some() {
            return Ok(false);
        }

        let phone = PhoneNumber::parse(raw)?;
        self.phones.push(phone);
        Ok(true)
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`
    ///
    /// Returns `Ok(false)` if `old_raw` is not present. The replacement keeps
    /// the old entry's position. If `new_raw` is already stored elsewhere the
    /// old entry is dropped so numbers stay unique.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<bool, ContactError> {
        let Some(index) = self.position_of(old_raw) else {
            return Ok(false);
        };

        let phone = PhoneNumber::parse(new_raw)?;

        match self.position_of(new_raw) {
            Some(existing) if existing != index => {
                self.phones.remove(index);
            }
            _ => self.phones[index] = phone,
        }

        Ok(true)
    }

    /// Remove the first phone equal to `raw`
    ///
    /// `raw` is compared by value and never validated.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position_of(raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Look up a phone by value
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| **phone == *raw)
    }

    /// Set the birthday if it has not been set yet
    ///
    /// Returns `Ok(false)` and keeps the existing value when a birthday is
    /// already present.
    pub fn add_birthday(&mut self, raw: &str) -> Result<bool, ContactError> {
        if self.birthday.is_some() {
            return Ok(false);
        }

        self.birthday = Some(Birthday::parse(raw)?);
        Ok(true)
    }

    /// True if no phone value appears twice
    pub fn has_unique_phones(&self) -> bool {
        self.phones
            .iter()
            .enumerate()
            .all(|(i, phone)| !self.phones[..i].contains(phone))
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| *phone == *raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_new_record() {
        let record = Record::new("Ann");
        assert_eq!(record.name(), "Ann");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_is_idempotent() {
        let mut record = Record::new("Ann");
        assert!(record.add_phone("1234567890").unwrap());
        assert!(!record.add_phone("1234567890").unwrap());
        assert_eq!(phone_values(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_add_phone_keeps_insertion_order() {
        let mut record = Record::new("Ann");
        record.add_phone("3333333333").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            phone_values(&record),
            vec!["3333333333", "1111111111", "2222222222"]
        );
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = Record::new("Ann");
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(err, ContactError::InvalidPhoneFormat));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        assert!(record.edit_phone("2222222222", "9999999999").unwrap());
        assert_eq!(
            phone_values(&record),
            vec!["1111111111", "9999999999", "3333333333"]
        );
    }

    #[test]
    fn test_edit_missing_phone_is_noop() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();

        assert!(!record.edit_phone("x", "2222222222").unwrap());
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_replacement() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, ContactError::InvalidPhoneFormat));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_onto_existing_number_stays_unique() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        assert!(record.edit_phone("1111111111", "2222222222").unwrap());
        assert_eq!(phone_values(&record), vec!["2222222222"]);
        assert!(record.has_unique_phones());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        assert!(record.remove_phone("1111111111"));
        assert!(!record.remove_phone("1111111111"));
        assert!(!record.remove_phone("not a phone"));
        assert_eq!(phone_values(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();

        assert_eq!(
            record.find_phone("1111111111").map(PhoneNumber::as_str),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_birthday_set_once() {
        let mut record = Record::new("Ann");
        assert!(record.add_birthday("14.06.1990").unwrap());
        assert!(!record.add_birthday("01.01.2000").unwrap());
        assert_eq!(record.birthday().unwrap().to_string(), "14.06.1990");
    }

    #[test]
    fn test_invalid_birthday() {
        let mut record = Record::new("Ann");
        let err = record.add_birthday("1990-06-14").unwrap_err();
        assert!(matches!(err, ContactError::InvalidDateFormat));
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("Ann");
        assert_eq!(record.to_string(), "Contact name: Ann, phones: ");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, phones: 1111111111; 2222222222"
        );

        record.add_birthday("14.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, phones: 1111111111; 2222222222, birthday: 14.06.1990"
        );
    }

    #[test]
    fn test_serialization() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_birthday("14.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
