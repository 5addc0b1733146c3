//! Handlers for individual console commands.
//!
//! Each handler validates its arguments, applies the change to the book
//! and returns the confirmation text. Failures are returned as
//! [`CommandError`] and rendered by the caller.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::info;

const NEED_NAME_AND_PHONE: &str = "Give me name and phone please.";
const NEED_NAME_AND_BIRTHDAY: &str = "Give me name and birthday please.";
const NEED_NAME: &str = "Give me a name please.";

fn find_record<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// `add NAME PHONE`: add a phone, creating the contact if needed.
///
/// A new contact is stored only once its first phone has validated.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments(NEED_NAME_AND_PHONE));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone)?;
    book.add_record(record);
    info!("Added contact {}", name);
    Ok("Contact added.".to_string())
}

/// `change NAME OLD NEW`
pub fn change_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, old, new, ..] = args else {
        return Err(CommandError::MissingArguments(NEED_NAME_AND_PHONE));
    };

    find_record_mut(book, name)?.edit_phone(old, new)?;
    Ok("The number has been changed.".to_string())
}

/// `phone NAME`
pub fn show_phone(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments(NEED_NAME));
    };

    Ok(find_record(book, name)?.to_string())
}

/// `all`: one line per contact, name padded to ten columns.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    book.records()
        .map(|record| format!("{:10} : {}", record.name().as_str(), record.phones_joined()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday NAME DD.MM.YYYY`
pub fn add_birthday(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::MissingArguments(NEED_NAME_AND_BIRTHDAY));
    };

    find_record_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday NAME`
pub fn show_birthday(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments(NEED_NAME));
    };

    Ok(find_record(book, name)?.birthday_summary())
}

/// `birthdays`: everyone to congratulate in the week starting `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete NAME`
pub fn delete_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments(NEED_NAME));
    };

    book.delete(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    info!("Deleted contact {}", name);
    Ok("Contact deleted.".to_string())
}
