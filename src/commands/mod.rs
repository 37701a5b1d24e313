//! Command parsing and dispatch for the interactive loop.
//!
//! This module turns one line of user input into one [`Outcome`]: either
//! text to print back, or the signal to shut down. Every internal
//! failure a handler can raise is collapsed here, in [`reply`], to the
//! single `Enter correct data.` line; the distinct error kinds stay
//! observable below this boundary for tests and logs.

pub mod handlers;

use crate::error::CommandResult;
use crate::models::AddressBook;

/// What the loop should do with one executed line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and prompt again.
    Reply(String),
    /// Save and terminate.
    Exit,
}

/// Split a raw input line into a lowercased command and its arguments.
///
/// Arguments keep their case. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Execute one line of input against the book.
pub fn execute(line: &str, book: &mut AddressBook) -> Outcome {
    let Some((command, args)) = parse_input(line) else {
        return Outcome::Reply("You have not provided a command!".to_string());
    };
    match command.as_str() {
        "close" | "exit" => Outcome::Exit,
        "hello" => Outcome::Reply("How can I help you?".to_string()),
        "add" => reply(handlers::add_contact(&args, book)),
        "change" => reply(handlers::change_contact(&args, book)),
        "phone" => reply(handlers::show_phone(&args, book)),
        "all" => Outcome::Reply(handlers::show_all(book)),
        "add-birthday" => reply(handlers::add_birthday(&args, book)),
        "show-birthday" => reply(handlers::show_birthday(&args, book)),
        "birthdays" => reply(handlers::birthdays(book)),
        _ => Outcome::Reply("Invalid command.".to_string()),
    }
}

// The one place command errors become user-facing text.
fn reply(result: CommandResult<String>) -> Outcome {
    match result {
        Ok(text) => Outcome::Reply(text),
        Err(err) => {
            tracing::debug!("Command failed: {err}");
            Outcome::Reply("Enter correct data.".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_text(outcome: Outcome) -> String {
        match outcome {
            Outcome::Reply(text) => text,
            Outcome::Exit => panic!("expected a reply, got Exit"),
        }
    }

    #[test]
    fn test_parse_input_splits_and_lowercases_command() {
        let (command, args) = parse_input("ADD John 1234567890").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["John", "1234567890"]);
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (_, args) = parse_input("phone John").unwrap();
        assert_eq!(args, ["John"]);
    }

    #[test]
    fn test_parse_input_blank_and_whitespace_lines() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t  ").is_none());
    }

    #[test]
    fn test_parse_input_collapses_repeated_whitespace() {
        let (command, args) = parse_input("  add   John    1234567890 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["John", "1234567890"]);
    }

    #[test]
    fn test_execute_hello() {
        let mut book = AddressBook::new();
        assert_eq!(
            execute("hello", &mut book),
            Outcome::Reply("How can I help you?".to_string())
        );
    }

    #[test]
    fn test_execute_blank_line() {
        let mut book = AddressBook::new();
        assert_eq!(
            execute("", &mut book),
            Outcome::Reply("You have not provided a command!".to_string())
        );
    }

    #[test]
    fn test_execute_unknown_command() {
        let mut book = AddressBook::new();
        assert_eq!(
            execute("frobnicate", &mut book),
            Outcome::Reply("Invalid command.".to_string())
        );
    }

    #[test]
    fn test_execute_close_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(execute("close", &mut book), Outcome::Exit);
        assert_eq!(execute("exit", &mut book), Outcome::Exit);
        assert_eq!(execute("EXIT", &mut book), Outcome::Exit);
    }

    #[test]
    fn test_execute_collapses_errors_to_one_line() {
        let mut book = AddressBook::new();
        // Missing arguments, bad phone, bad date: all the same reply.
        for line in ["add John", "add John 123", "add-birthday John 31.02.2024"] {
            assert_eq!(
                reply_text(execute(line, &mut book)),
                "Enter correct data.",
                "line: {line}"
            );
        }
    }

    #[test]
    fn test_execute_full_session() {
        let mut book = AddressBook::new();

        assert_eq!(
            reply_text(execute("add John 1234567890", &mut book)),
            "Contact John with phone - 1234567890 added."
        );
        assert_eq!(
            reply_text(execute("add-birthday John 25.02.1990", &mut book)),
            "Birthday John - 25.02.1990 added."
        );
        assert_eq!(
            reply_text(execute("phone John", &mut book)),
            "1234567890"
        );
        assert_eq!(
            reply_text(execute("show-birthday John", &mut book)),
            "25.02.1990"
        );
        assert_eq!(
            reply_text(execute("change John 1234567890 1112223333", &mut book)),
            "Contact John changed his old number 1234567890 to 1112223333 new number."
        );
        assert_eq!(
            reply_text(execute("all", &mut book)),
            "Contact name: John, phones: 1112223333, Birthday: 25.02.1990"
        );
    }

    #[test]
    fn test_execute_all_on_empty_book() {
        let mut book = AddressBook::new();
        assert_eq!(
            reply_text(execute("all", &mut book)),
            "There is no contact!"
        );
    }
}
