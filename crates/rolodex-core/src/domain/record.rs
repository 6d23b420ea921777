use crate::domain::birthday::Birthday;
use crate::domain::name::Name;
use crate::domain::phone::{digits_only, Phone};
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

const NO_BIRTHDAY: &str = "not added yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    // Only the address book renames records so its key follows the name.
    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw)?;
        if self.position_of(phone.value()).is_some() {
            return Err(CoreError::DuplicatePhone);
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone, CoreError> {
        let index = self
            .position_of(&digits_only(raw))
            .ok_or(CoreError::PhoneNotFound)?;
        Ok(self.phones.remove(index))
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let index = self
            .position_of(&digits_only(old))
            .ok_or(CoreError::PhoneNotFound)?;
        let replacement = Phone::new(new)?;
        if matches!(self.position_of(replacement.value()), Some(other) if other != index) {
            return Err(CoreError::DuplicatePhone);
        }
        self.phones[index] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.position_of(&digits_only(raw))
            .map(|index| &self.phones[index])
    }

    pub fn add_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<(), CoreError> {
        if self.birthday.is_some() {
            return Err(CoreError::DuplicateBirthday);
        }
        self.birthday = Some(Birthday::parse(raw, today)?);
        Ok(())
    }

    fn position_of(&self, digits: &str) -> Option<usize> {
        if digits.is_empty() {
            return None;
        }
        self.phones.iter().position(|phone| phone == digits)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Contact name: {}; phones: {}; birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str(NO_BIRTHDAY),
        }
    }
}
