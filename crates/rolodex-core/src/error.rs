use crate::time::DATE_FORMAT;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Value provided should be a proper name: {0}")]
    InvalidName(String),
    #[error("Phone number must contain only digits")]
    PhoneWithoutDigits,
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhoneLength(usize),
    #[error("Invalid date or its format. DD.MM.YYYY should be used")]
    InvalidBirthdayFormat,
    #[error("Birthday cannot be in the future. Today is {}", .today.format(DATE_FORMAT))]
    BirthdayInFuture { today: NaiveDate },
    #[error("invalid upcoming window: {0} days")]
    InvalidWindowDays(i64),
    #[error("This phone number already exists for this contact")]
    DuplicatePhone,
    #[error("Birthday already exists for this contact")]
    DuplicateBirthday,
    #[error("Contact {0} already exists")]
    DuplicateRecord(String),
    #[error("Phone number not found for this contact")]
    PhoneNotFound,
    #[error("Contact {0} not found")]
    RecordNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    Conflict,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::EmptyName
            | CoreError::InvalidName(_)
            | CoreError::PhoneWithoutDigits
            | CoreError::InvalidPhoneLength(_)
            | CoreError::InvalidBirthdayFormat
            | CoreError::BirthdayInFuture { .. }
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::Validation,
            CoreError::DuplicatePhone
            | CoreError::DuplicateBirthday
            | CoreError::DuplicateRecord(_) => CoreErrorKind::Conflict,
            CoreError::PhoneNotFound | CoreError::RecordNotFound(_) => CoreErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreError, CoreErrorKind};
    use chrono::NaiveDate;

    #[test]
    fn future_birthday_message_names_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let err = CoreError::BirthdayInFuture { today };
        assert_eq!(
            err.to_string(),
            "Birthday cannot be in the future. Today is 05.03.2024"
        );
    }

    #[test]
    fn kinds_group_variants() {
        assert_eq!(CoreError::EmptyName.kind(), CoreErrorKind::Validation);
        assert_eq!(CoreError::DuplicatePhone.kind(), CoreErrorKind::Conflict);
        assert_eq!(
            CoreError::RecordNotFound("Ada".to_string()).kind(),
            CoreErrorKind::NotFound
        );
    }
}
