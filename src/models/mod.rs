//! Data models for the address book.
//!
//! This module contains the contact record and the address book that owns
//! the records and answers the upcoming-birthdays query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
