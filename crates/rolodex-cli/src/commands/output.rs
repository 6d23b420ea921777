use crate::commands::{help_text, COMMANDS};
use rolodex_core::domain::{Birthday, Record};
use rolodex_core::dto::{ContactDto, UpcomingBirthdayDto};
use rolodex_core::rules::UpcomingBirthday;
use rolodex_core::time::format_date;
use rolodex_core::EMPTY_BOOK;
use serde_json::{json, Value};

pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const NO_PHONES: &str = "No phone numbers recorded for this contact.";
pub const NO_BIRTHDAY: &str = "No birthday set for this contact.";
pub const NO_UPCOMING: &str = "No upcoming birthdays.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Nothing,
    Message(&'static str),
    Phones(Vec<String>),
    Birthday(Option<Birthday>),
    Contacts(Vec<Record>),
    Upcoming(Vec<UpcomingBirthday>),
    Help,
    Goodbye,
}

impl Output {
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            Output::Nothing => return None,
            Output::Message(message) => message.to_string(),
            Output::Phones(phones) if phones.is_empty() => NO_PHONES.to_string(),
            Output::Phones(phones) => phones.join("\n"),
            Output::Birthday(Some(birthday)) => birthday.to_string(),
            Output::Birthday(None) => NO_BIRTHDAY.to_string(),
            Output::Contacts(records) if records.is_empty() => EMPTY_BOOK.to_string(),
            Output::Contacts(records) => records
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Upcoming(items) if items.is_empty() => NO_UPCOMING.to_string(),
            Output::Upcoming(items) => items
                .iter()
                .map(|item| {
                    format!(
                        "Name: {}, congratulation date: {}",
                        item.name,
                        format_date(item.congratulation_date)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Help => help_text(),
            Output::Goodbye => GOODBYE.to_string(),
        };
        Some(text)
    }

    pub fn to_json(&self) -> Value {
        match self {
            Output::Nothing => Value::Null,
            Output::Message(message) => json!({ "message": message }),
            Output::Phones(phones) => json!(phones),
            Output::Birthday(birthday) => json!(birthday.map(|value| value.to_string())),
            Output::Contacts(records) => {
                let dtos: Vec<ContactDto> = records.iter().map(ContactDto::from).collect();
                json!(dtos)
            }
            Output::Upcoming(items) => {
                let dtos: Vec<UpcomingBirthdayDto> =
                    items.iter().map(UpcomingBirthdayDto::from).collect();
                json!(dtos)
            }
            Output::Help => Value::Array(
                COMMANDS
                    .iter()
                    .map(|command| {
                        json!({ "usage": command.usage(), "description": command.description() })
                    })
                    .collect(),
            ),
            Output::Goodbye => json!({ "message": GOODBYE }),
        }
    }
}
