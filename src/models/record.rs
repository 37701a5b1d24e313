//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// Phones are kept in insertion order and duplicates are permitted; no
/// uniqueness is enforced. The value objects re-validate on
/// deserialization, so a loaded record is as trustworthy as a freshly
/// constructed one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given contact name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the raw value is
    /// not a valid phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Find the first phone whose value equals `raw`. Linear scan.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Remove the first phone whose value equals `raw`.
    ///
    /// Returns whether a removal occurred.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|phone| phone.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with a validated phone built from `new`.
    ///
    /// The old phone is removed first and the new one appended, so an
    /// edited phone moves to the end of the list. If `new` fails
    /// validation the old phone has already been removed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` if `old` is not on the
    /// record, or `ValidationError::InvalidPhoneFormat` if `new` is not a
    /// valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Err(ValidationError::PhoneNotFound(old.to_string()));
        }
        self.remove_phone(old);
        self.add_phone(new)
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the raw value is
    /// not a valid `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|birthday| birthday.to_string())
            .unwrap_or_default();

        write!(
            f,
            "Contact name: {}, phones: {}, Birthday: {}",
            self.name.capitalized(),
            phones,
            birthday
        )
    }
}
