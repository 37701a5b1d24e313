//! One handler per user command.
//!
//! Handlers take the already-split argument list and the address book,
//! and return the reply text. Validation and arity failures come back as
//! [`CommandError`]; the dispatcher in the parent module turns those
//! into the single user-facing `Enter correct data.` line. Lookup misses
//! are ordinary replies (`Contact <name> not found.`), not errors.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};

/// `add <name> <phone>`: append a phone to the named record, creating
/// the record first when the name is new.
///
/// The record is inserted before the phone is validated, so a failing
/// phone still leaves a bare record behind. A later `add` with a good
/// phone fills it in.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArguments {
            expected: 2,
            got: args.len(),
        });
    };
    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name)?;
            let added = record.add_phone(phone);
            book.add_record(record);
            added?;
        }
    }
    Ok(format!("Contact {name} with phone - {phone} added."))
}

/// `change <name> <old> <new>`: replace one phone on an existing record.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::MissingArguments {
            expected: 3,
            got: args.len(),
        });
    };
    match book.find_mut(name) {
        None => Ok(format!("{name} not found.")),
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok(format!(
                "Contact {name} changed his old number {old_phone} to {new_phone} new number."
            ))
        }
    }
}

/// `phone <name>`: list the record's phones, comma separated.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let Some(name) = args.first() else {
        return Err(CommandError::MissingArguments {
            expected: 1,
            got: 0,
        });
    };
    match book.find(name) {
        None => Ok(format!("Contact {name} not found.")),
        Some(record) => Ok(record
            .phones()
            .iter()
            .map(|phone| phone.as_str())
            .collect::<Vec<_>>()
            .join(", ")),
    }
}

/// `all`: render every record, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "There is no contact!".to_string()
    } else {
        book.to_string()
    }
}

/// `add-birthday <name> <birthday>`: set the record's birthday, creating
/// the record first when the name is new.
///
/// Same insertion order as [`add_contact`]: a record with a valid name
/// but an invalid birthday is kept, without a birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::MissingArguments {
            expected: 2,
            got: args.len(),
        });
    };
    match book.find_mut(name) {
        Some(record) => record.add_birthday(birthday)?,
        None => {
            let mut record = Record::new(name)?;
            let added = record.add_birthday(birthday);
            book.add_record(record);
            added?;
        }
    }
    Ok(format!("Birthday {name} - {birthday} added."))
}

/// `show-birthday <name>`: the record's birthday as `DD.MM.YYYY`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let Some(name) = args.first() else {
        return Err(CommandError::MissingArguments {
            expected: 1,
            got: 0,
        });
    };
    match book.find(name) {
        None => Ok(format!("Contact {name} not found.")),
        Some(record) => match record.birthday() {
            Some(birthday) => Ok(birthday.to_string()),
            None => Ok(format!("Contact {name} has no birthday.")),
        },
    }
}

/// `birthdays`: the upcoming-birthday report for the local calendar date.
pub fn birthdays(book: &AddressBook) -> CommandResult<String> {
    upcoming_report(book, Local::now().date_naive())
}

/// Render the upcoming-birthday report for an explicit `today`.
///
/// One `<name>: <DD-MM-YYYY>` line per contact in book order, or a
/// descriptive line when the window is empty.
pub fn upcoming_report(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today)?;
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays next 7 days.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.date.format("%d-%m-%Y")))
        .collect::<Vec<_>>()
        .join("\n"))
}
