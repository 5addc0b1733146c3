//! Console command parsing and dispatch.
//!
//! Commands are whitespace-separated words: a case-insensitive command
//! name followed by positional arguments. Handlers live in [`handlers`]
//! and return typed errors; [`dispatch`] turns those into the replies the
//! user sees.

pub mod handlers;

use crate::models::AddressBook;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Every command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Exit,
    Unknown(String),
}

impl From<&str> for Command {
    fn from(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// What the console should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Stop the loop.
    Exit,
}

/// Split a line into a command and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = Command::from(words.next()?);
    Some((command, words.map(str::to_string).collect()))
}

/// Parse and execute one line of input against the book.
///
/// `today` anchors the `birthdays` command. Returns `None` for blank input.
pub fn dispatch(book: &mut AddressBook, line: &str, today: NaiveDate) -> Option<Reply> {
    let (command, args) = parse_input(line)?;
    debug!("Dispatching {:?} with {} argument(s)", command, args.len());

    let result = match &command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(book, &args),
        Command::Change => handlers::change_contact(book, &args),
        Command::Phone => handlers::show_phone(book, &args),
        Command::All => Ok(handlers::show_all(book)),
        Command::AddBirthday => handlers::add_birthday(book, &args),
        Command::ShowBirthday => handlers::show_birthday(book, &args),
        Command::Birthdays => Ok(handlers::birthdays(book, today)),
        Command::Delete => handlers::delete_contact(book, &args),
        Command::Exit => return Some(Reply::Exit),
        Command::Unknown(word) => {
            warn!("Unknown command: {}", word);
            Ok("Invalid command.".to_string())
        }
    };

    Some(Reply::Message(result.unwrap_or_else(|err| {
        warn!("{:?} rejected: {:?}", command, err);
        err.to_string()
    })))
}
