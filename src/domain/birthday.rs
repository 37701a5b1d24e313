//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format birthdays are parsed from and rendered to.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for contact birthdays.
///
/// A birthday is parsed from a `DD.MM.YYYY` string at construction time
/// and stored as a calendar date, not as the original string.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
///
/// let birthday = Birthday::new("25.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "25.02.2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, parsing and validating the date.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY`: 2-digit day, 2-digit month, 4-digit year
    /// - Must denote a real calendar date (rejects `31.02.2024`)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the value does not
    /// parse as a valid date under that format.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !Self::has_expected_shape(raw) {
            return Err(ValidationError::InvalidDateFormat(raw.to_string()));
        }

        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))?;

        Ok(Self(date))
    }

    /// Check the fixed-width `DD.MM.YYYY` shape. chrono alone would also
    /// accept unpadded components like `5.2.2024`.
    fn has_expected_shape(raw: &str) -> bool {
        let parts: Vec<&str> = raw.split('.').collect();

        if parts.len() != 3 {
            return false;
        }

        parts
            .iter()
            .zip([2, 2, 4])
            .all(|(part, width)| part.len() == width && part.chars().all(|c| c.is_ascii_digit()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
