//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A contact: a name, any number of phones and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and are
/// not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: ContactName,

    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` when no phone in the list matches.
    pub fn remove_phone(&mut self, number: &str) -> RecordResult<()> {
        let index = self.position_of(number)?;
        self.phones.remove(index);
        debug!("Removed phone {} from {}", number, self.name);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the lookup, so an invalid replacement is
    /// reported even when `old` is also missing.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let index = self.position_of(old)?;
        debug!("Changing phone {} to {} for {}", old, replacement, self.name);
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find a phone by its exact number.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == number)
    }

    /// Parse and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(text)?;
        debug!("Setting birthday {} for {}", birthday, self.name);
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable birthday line for this contact.
    pub fn birthday_summary(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("{} birthday is on {}", self.name, birthday),
            None => format!("No birthday found for {}", self.name),
        }
    }

    /// Phones joined with `"; "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, number: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone == number)
            .ok_or_else(|| RecordError::PhoneNotFound(number.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Anna").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("Anna").unwrap();
        assert_eq!(record.name().as_str(), "Anna");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_new_record_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_then_find() {
        let record = record_with_phones(&["0501234567"]);
        let found = record.find_phone("0501234567").unwrap();
        assert_eq!(found.as_str(), "0501234567");
        assert!(record.find_phone("0999999999").is_none());
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = record_with_phones(&["0501234567"]);
        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_duplicate_phones_are_kept() {
        let record = record_with_phones(&["0501234567", "0501234567"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_only_phone_empties_list() {
        let mut record = record_with_phones(&["0501234567"]);
        record.remove_phone("0501234567").unwrap();
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_not_first_in_list() {
        let mut record = record_with_phones(&["0501234567", "0671112233", "0931234567"]);
        record.remove_phone("0931234567").unwrap();
        assert_eq!(record.phones_joined(), "0501234567; 0671112233");
    }

    #[test]
    fn test_remove_phone_removes_exactly_one_duplicate() {
        let mut record = record_with_phones(&["0501234567", "0671112233", "0501234567"]);
        record.remove_phone("0501234567").unwrap();
        assert_eq!(record.phones_joined(), "0671112233; 0501234567");
    }

    #[test]
    fn test_remove_missing_phone_fails() {
        let mut record = record_with_phones(&["0501234567"]);
        assert_eq!(
            record.remove_phone("0999999999"),
            Err(RecordError::PhoneNotFound("0999999999".to_string()))
        );
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = record_with_phones(&["0501234567", "0671112233"]);
        record.edit_phone("0671112233", "0939998877").unwrap();
        assert!(record.find_phone("0671112233").is_none());
        assert_eq!(
            record.find_phone("0939998877").map(PhoneNumber::as_str),
            Some("0939998877")
        );
        assert_eq!(record.phones_joined(), "0501234567; 0939998877");
    }

    #[test]
    fn test_edit_phone_invalid_replacement() {
        let mut record = record_with_phones(&["0501234567"]);
        let result = record.edit_phone("0501234567", "bad");
        assert!(matches!(
            result,
            Err(RecordError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(record.phones_joined(), "0501234567");
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with_phones(&["0501234567"]);
        assert_eq!(
            record.edit_phone("0000000000", "0939998877"),
            Err(RecordError::PhoneNotFound("0000000000".to_string()))
        );
    }

    #[test]
    fn test_birthday_summary() {
        let mut record = Record::new("Anna").unwrap();
        assert_eq!(record.birthday_summary(), "No birthday found for Anna");

        record.add_birthday("12.06.1990").unwrap();
        assert_eq!(record.birthday_summary(), "Anna birthday is on 12.06.1990");

        record.add_birthday("13.07.1991").unwrap();
        assert_eq!(record.birthday_summary(), "Anna birthday is on 13.07.1991");
    }

    #[test]
    fn test_invalid_birthday_keeps_previous() {
        let mut record = Record::new("Anna").unwrap();
        record.add_birthday("12.06.1990").unwrap();
        assert!(record.add_birthday("31.06.1990").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "12.06.1990");
    }

    #[test]
    fn test_display() {
        let record = record_with_phones(&["0501234567", "0671112233"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Anna, phones: 0501234567; 0671112233"
        );
        assert_eq!(
            Record::new("Ben").unwrap().to_string(),
            "Contact name: Ben, phones: "
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record_with_phones(&["0501234567"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Anna", "phones": ["0501234567"]})
        );

        record.add_birthday("12.06.1990").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["birthday"], "12.06.1990");
    }
}
