//! Shared fixtures for integration tests.
//!
//! Provides reusable dates and records so individual tests only spell out
//! what they are checking.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Record};

/// Monday, 10 June 2024.
pub fn monday() -> NaiveDate {
    date(2024, 6, 10)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// A book holding one record per `(name, birthday)` pair, each with a phone.
pub fn sample_book(contacts: &[(&str, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in contacts {
        book.add_record(sample_record(name, &["0501234567"], *birthday));
    }
    book
}
