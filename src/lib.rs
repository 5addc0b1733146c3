//! Contact Assistant - a console bot for keeping contacts, phone numbers and birthdays.
//!
//! This library provides an in-memory address book with validated contact
//! fields, a query for birthdays in the coming week, and the command layer
//! that drives it from a text console.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Contact records and the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **commands**: Parsing and handling of console commands
//! - **console**: The interactive read/dispatch/print loop

pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;

pub use commands::{dispatch, parse_input, Command, Reply};
pub use config::Config;
pub use console::run_console;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::{AddressBook, Record, UpcomingBirthday};
