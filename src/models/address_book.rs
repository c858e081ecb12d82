//! Address book
//!
//! Owns every contact record, keyed by name and kept in insertion order, and
//! answers the upcoming-birthday query.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::HashMap;
use std::fmt;

use super::birthday::BIRTHDAY_FORMAT;
use super::record::Record;

/// Default length of the birthday reminder window, in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the reminder window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The next occurrence, or the following Monday if it falls on a weekend
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.formatted_date())
    }
}

/// All contacts, keyed by name
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Index: name -> position in `records`
    by_name: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless one with the same name exists
    ///
    /// Returns `false` and leaves the existing record untouched on conflict.
    pub fn add_record(&mut self, record: Record) -> bool {
        if self.by_name.contains_key(record.name()) {
            return false;
        }

        self.by_name
            .insert(record.name().to_string(), self.records.len());
        self.records.push(record);
        true
    }

    /// Look up a record by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    /// Look up a record by name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.by_name.get(name) {
            Some(&index) => self.records.get_mut(index),
            None => None,
        }
    }

    /// Remove a record by name
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(index) = self.by_name.remove(name) else {
            return false;
        };

        self.records.remove(index);
        for position in self.by_name.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contact names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    /// Birthdays in the [`DEFAULT_WINDOW_DAYS`] days starting at `reference`
    pub fn get_upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(reference, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays in the `days` days starting at `reference` (inclusive)
    ///
    /// Each birthday is projected onto the reference year, or the next year if
    /// that date has already passed. Saturday and Sunday occurrences are
    /// congratulated on the following Monday. Results follow insertion order.
    /// Windows reaching past the last representable date end there.
    pub fn upcoming_birthdays_within(
        &self,
        reference: NaiveDate,
        days: u32,
    ) -> Vec<UpcomingBirthday> {
        if days == 0 {
            return Vec::new();
        }
        let end = reference
            .checked_add_days(Days::new(u64::from(days) - 1))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut occurrence = birthday.occurrence_in(reference.year())?;
                if occurrence < reference {
                    occurrence = birthday.occurrence_in(reference.year() + 1)?;
                }

                if occurrence > end {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: shift_off_weekend(occurrence),
                })
            })
            .collect()
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for AddressBook {}

/// Move Saturday and Sunday to the following Monday
///
/// A weekend at the end of the calendar stays where it is.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}
