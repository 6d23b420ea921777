use crate::domain::{Name, Record};
use crate::error::CoreError;
use crate::rules::birthdays::{upcoming_birthdays, UpcomingBirthday};
use chrono::NaiveDate;
use std::fmt;

pub const EMPTY_BOOK: &str = "Address book is empty";

/// Contacts keyed by name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<(), CoreError> {
        if self.position_of(record.name().value()).is_some() {
            return Err(CoreError::DuplicateRecord(record.name().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position_of(name).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position_of(name)
            .map(move |index| &mut self.records[index])
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        let index = self
            .position_of(name)
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn rename(&mut self, current: &str, new_name: &str) -> Result<(), CoreError> {
        let index = self
            .position_of(current)
            .ok_or_else(|| CoreError::RecordNotFound(current.to_string()))?;
        let name = Name::new(new_name)?;
        if matches!(self.position_of(name.value()), Some(other) if other != index) {
            return Err(CoreError::DuplicateRecord(name.to_string()));
        }
        self.records[index].set_name(name);
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.records, today, window_days)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return f.write_str(EMPTY_BOOK);
        }
        for (index, record) in self.records.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
