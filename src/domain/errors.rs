//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation or
/// record-level phone lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 ASCII digits.
    InvalidPhoneFormat(String),

    /// The provided birthday is not a real `DD.MM.YYYY` calendar date.
    InvalidDateFormat(String),

    /// The phone number to edit is not on the record.
    PhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhoneFormat(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidDateFormat(date) => write!(f, "Invalid date: {}", date),
            Self::PhoneNotFound(phone) => write!(f, "Phone not found: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
