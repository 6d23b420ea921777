use crate::error::CoreError;
use crate::time::{format_date, DATE_FORMAT};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a `DD.MM.YYYY` birthday that must not be later than `today`.
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let date = parse_birthday_date(raw)?;
        Self::from_date(date, today)
    }

    pub fn from_date(date: NaiveDate, today: NaiveDate) -> Result<Self, CoreError> {
        if date > today {
            return Err(CoreError::BirthdayInFuture { today });
        }
        Ok(Self(date))
    }

    /// A birthday that was accepted earlier. The future-date check only
    /// applies to user input, so a stored value loads regardless of the clock.
    pub fn from_stored(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn set(&mut self, raw: &str, today: NaiveDate) -> Result<(), CoreError> {
        *self = Self::parse(raw, today)?;
        Ok(())
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

impl PartialEq<NaiveDate> for Birthday {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.0 == *other
    }
}

// chrono accepts single-digit days and months for %d/%m, so the shape is
// checked first.
fn parse_birthday_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return Err(CoreError::InvalidBirthdayFormat);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| CoreError::InvalidBirthdayFormat)
}
