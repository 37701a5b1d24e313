//! Assistant bot - Main entry point
//!
//! Loads the address book, runs the interactive command loop on
//! stdin/stdout, and saves the book back to disk on exit.

use anyhow::Result;
use assistant_bot::commands::{self, Outcome};
use assistant_bot::{Config, FileStore};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout belongs to the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Loading address book from {:?}", config.addressbook_path);
    let store = FileStore::new(&config.addressbook_path);
    let mut book = store.load()?;

    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input counts as a close, so piped sessions persist too.
            break;
        }
        match commands::execute(&line, &mut book) {
            Outcome::Reply(text) => println!("{text}"),
            Outcome::Exit => break,
        }
    }

    store.save(&book)?;
    println!("Good bye!");
    info!("Session ended, book saved");
    Ok(())
}
