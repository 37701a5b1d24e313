//! Assistant bot - a command-line contact manager with birthday scheduling.
//!
//! This library implements an interactive address book: validated contact
//! fields, records holding phone numbers and an optional birthday, an
//! insertion-ordered book with an upcoming-birthday query, JSON file
//! persistence, and the command dispatcher that drives it all from a
//! simple read-eval-print loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (Name, Phone, Birthday) and their errors
//! - **models**: Record and AddressBook, including the upcoming-birthday query
//! - **commands**: Input parsing and command dispatch
//! - **storage**: JSON file persistence for the address book
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types above the domain layer

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{execute, parse_input, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::FileStore;
