//! Birthday value type
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY`. Parsing is strict:
//! two-digit day, two-digit month, four-digit year, and the result must be a
//! real calendar date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

/// Display and input format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A validated birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    ///
    /// # Examples
    /// ```
    /// use contacts::models::Birthday;
    /// let birthday = Birthday::parse("14.06.1990").unwrap();
    /// assert_eq!(birthday.to_string(), "14.06.1990");
    /// assert!(Birthday::parse("31.02.2024").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        if !has_birthday_shape(raw) {
            return Err(ContactError::InvalidDateFormat);
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::InvalidDateFormat)
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day in the given year
    ///
    /// A 29 February birthday falls on 1 March in non-leap years. Returns
    /// `None` only when `year` is outside the supported calendar range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }
}

/// `DD.MM.YYYY` with ASCII digits in every non-separator position
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
