//! The address book: records keyed by contact name, plus the
//! upcoming-birthdays query.

use super::record::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// How many days ahead (today included) the birthday query looks.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Output format for congratulation dates.
pub const UPCOMING_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,

    /// The birthday's occurrence, moved to Monday when it lands on a weekend.
    #[serde(serialize_with = "serialize_upcoming_date")]
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn date_string(&self) -> String {
        self.date.format(UPCOMING_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} birthday is on {}", self.name, self.date_string())
    }
}

fn serialize_upcoming_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(UPCOMING_DATE_FORMAT))
}

/// All contacts, keyed by name.
///
/// Iteration order is ascending by name. Adding a record whose name is
/// already present replaces the stored record.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            debug!("Replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record for `name`, or `None` if there is none.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!("Deleted record {}", name);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only iteration over records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose birthday is due within the week starting at `today`.
    ///
    /// A birthday qualifies when either its occurrence or its congratulation
    /// date (weekend occurrences moved to the following Monday) lies in
    /// `[today, today + 7 days)`. The reported date is always the
    /// congratulation date. Birthdays already behind `today` this year are
    /// checked against next year's occurrence.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today + Days::new(UPCOMING_WINDOW_DAYS);
        let in_window = |date: NaiveDate| today <= date && date < window_end;

        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let (occurrence, congratulation) = [today.year(), today.year() + 1]
                    .into_iter()
                    .filter_map(|year| birthday.occurrence_in(year))
                    .map(|occurrence| (occurrence, move_off_weekend(occurrence)))
                    .find(|(_, congratulation)| *congratulation >= today)?;

                if in_window(occurrence) || in_window(congratulation) {
                    Some(UpcomingBirthday {
                        name: record.name().to_string(),
                        date: congratulation,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Saturday and Sunday move forward to Monday; weekdays are unchanged.
fn move_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}
