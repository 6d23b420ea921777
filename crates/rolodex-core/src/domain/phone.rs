use crate::domain::field::string_field;
use crate::error::CoreError;

pub const PHONE_DIGITS: usize = 10;

string_field!(Phone, normalize_phone);

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return Err(CoreError::PhoneWithoutDigits);
    }
    if digits.len() != PHONE_DIGITS {
        return Err(CoreError::InvalidPhoneLength(digits.len()));
    }
    Ok(digits)
}
