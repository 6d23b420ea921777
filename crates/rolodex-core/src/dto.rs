use crate::domain::{Phone, Record};
use crate::rules::UpcomingBirthday;
use crate::time::format_date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub birthday: String,
    pub congratulation_date: String,
}

impl From<&Record> for ContactDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(Phone::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
        }
    }
}

impl From<&UpcomingBirthday> for UpcomingBirthdayDto {
    fn from(item: &UpcomingBirthday) -> Self {
        Self {
            name: item.name.clone(),
            birthday: format_date(item.birthday),
            congratulation_date: format_date(item.congratulation_date),
        }
    }
}
