//! Phone number value type
//!
//! A phone number is exactly ten ASCII decimal digits. There is no
//! normalization: separators, country prefixes and whitespace are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

/// Number of digits in a valid phone number
pub const PHONE_DIGITS: usize = 10;

/// A validated ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a phone number from raw input
    ///
    /// # Examples
    /// ```
    /// use contacts::models::PhoneNumber;
    /// assert!(PhoneNumber::parse("0501234567").is_ok());
    /// assert!(PhoneNumber::parse("050-123-45").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        if is_valid_phone(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ContactError::InvalidPhoneFormat)
        }
    }

    /// The digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_phone(raw: &str) -> bool {
    raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_phone(&value) {
            Ok(Self(value))
        } else {
            Err(ContactError::InvalidPhoneFormat)
        }
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
