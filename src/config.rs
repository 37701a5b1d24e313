//! Configuration for the assistant bot.
//!
//! This module loads settings from environment variables, with a `.env`
//! file honored when present. Nothing is required: every setting has a
//! default, so a bare `assistant-bot` invocation just works.

use std::env;
use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book JSON file lives (default: `addressbook.json`)
    pub addressbook_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESSBOOK_PATH`: Path of the address book file (default: `addressbook.json`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> Self {
        // Try to load .env file if it exists (but don't fail if it doesn't).
        // dotenvy::dotenv() doesn't print to stdout, which stays reserved
        // for the conversation itself.
        let _ = dotenvy::dotenv();

        let addressbook_path = env::var("ADDRESSBOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("addressbook.json"));

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Config {
            addressbook_path,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addressbook_path: PathBuf::from("addressbook.json"),
            log_level: "error".to_string(),
        }
    }
}
