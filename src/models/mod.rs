//! Data models for the address book.
//!
//! This module contains the data structures representing contact records
//! and the address book that owns them.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
