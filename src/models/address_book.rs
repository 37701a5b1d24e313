//! AddressBook model: the keyed collection of contact records.

use crate::domain::ValidationError;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One entry in the upcoming-birthdays report.
///
/// `date` is the date the congratulation is due: the birthday moved into
/// the current year and, when it lands on a weekend, shifted forward to
/// the following Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

/// A collection of contact records keyed by contact name.
///
/// Keys are unique, one record per name, and lookups are exact and
/// case-sensitive. Iteration yields records in insertion order; adding a
/// record under an existing name replaces the record but keeps the key's
/// original position. The mapping itself is private: callers go through
/// the operations below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Insertion order of the keys above; kept in lockstep by add/delete.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its contact name, replacing any existing
    /// record with the same name (no merge).
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name.
    ///
    /// Returns whether a removal occurred.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
            true
        } else {
            false
        }
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Collect the contacts whose birthdays fall within the next 7 days
    /// of `today` (inclusive on both ends, an 8-day window), in the
    /// book's insertion order.
    ///
    /// Each birthday is first moved into `today`'s year; the window test
    /// uses that unshifted date. Dates landing on Saturday or Sunday are
    /// shifted forward to Monday in the reported result only, so a
    /// Saturday on the last day of the window is reported two days past
    /// it. Birthdays late in December are not rolled into the next year:
    /// checked in late December they fall before `today` and are
    /// excluded.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` when a stored
    /// birthday does not exist in `today`'s year (a Feb 29 birthday in a
    /// non-leap year).
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<UpcomingBirthday>, ValidationError> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let this_year = birthday
                .date()
                .with_year(today.year())
                .ok_or_else(|| ValidationError::InvalidDateFormat(birthday.to_string()))?;

            if today <= this_year && this_year <= today + Duration::days(7) {
                let date = match this_year.weekday() {
                    Weekday::Sat => this_year + Duration::days(2),
                    Weekday::Sun => this_year + Duration::days(1),
                    _ => this_year,
                };
                upcoming.push(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                });
            }
        }

        Ok(upcoming)
    }
}

// Serde support - serialize as a sequence of records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

// Serde support - deserialize from a record sequence, rebuilding the keys
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

// Display support - one record per line, insertion order
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
