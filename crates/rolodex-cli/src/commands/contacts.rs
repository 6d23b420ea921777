use crate::commands::{take_args, Output};
use crate::error::CommandError;
use rolodex_core::domain::Record;
use rolodex_core::{AddressBook, CoreError};

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_RENAMED: &str = "Contact renamed.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const PHONE_REMOVED: &str = "Phone removed.";

type Result<T> = std::result::Result<T, CommandError>;

pub fn add(book: &mut AddressBook, args: &[String]) -> Result<Output> {
    let [name, phone] = take_args(args)?;
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Output::Message(CONTACT_UPDATED));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record)?;
    Ok(Output::Message(CONTACT_ADDED))
}

pub fn change(book: &mut AddressBook, args: &[String]) -> Result<Output> {
    let [name, old_phone, new_phone] = take_args(args)?;
    find_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok(Output::Message(CONTACT_UPDATED))
}

pub fn phone(book: &AddressBook, args: &[String]) -> Result<Output> {
    let [name] = take_args(args)?;
    let record = find(book, name)?;
    let phones = record.phones().iter().map(ToString::to_string).collect();
    Ok(Output::Phones(phones))
}

pub fn remove_phone(book: &mut AddressBook, args: &[String]) -> Result<Output> {
    let [name, phone] = take_args(args)?;
    find_mut(book, name)?.remove_phone(phone)?;
    Ok(Output::Message(PHONE_REMOVED))
}

pub fn all(book: &AddressBook) -> Output {
    Output::Contacts(book.records().to_vec())
}

pub fn rename(book: &mut AddressBook, args: &[String]) -> Result<Output> {
    let [name, new_name] = take_args(args)?;
    book.rename(name, new_name)?;
    Ok(Output::Message(CONTACT_RENAMED))
}

pub fn delete(book: &mut AddressBook, args: &[String]) -> Result<Output> {
    let [name] = take_args(args)?;
    book.delete(name)?;
    Ok(Output::Message(CONTACT_DELETED))
}

pub(crate) fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| CoreError::RecordNotFound(name.to_string()).into())
}

pub(crate) fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CoreError::RecordNotFound(name.to_string()).into())
}
