//! Error types for the assistant bot.
//!
//! This module defines the error types raised above the domain layer using
//! `thiserror`. Domain validation keeps its own hand-rolled
//! [`ValidationError`](crate::domain::ValidationError) enum and converts
//! into [`CommandError`] at the command boundary.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command invoked with the wrong number of arguments
    #[error("expected {expected} argument(s), got {got}")]
    MissingArguments { expected: usize, got: usize },

    /// A value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid address book
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
