use crate::commands::contacts::{find, find_mut};
use crate::commands::{take_args, Output};
use crate::error::CommandError;
use chrono::NaiveDate;
use rolodex_core::AddressBook;

pub const BIRTHDAY_ADDED: &str = "Birthday added.";

type Result<T> = std::result::Result<T, CommandError>;

pub fn add_birthday(book: &mut AddressBook, args: &[String], today: NaiveDate) -> Result<Output> {
    let [name, date] = take_args(args)?;
    find_mut(book, name)?.add_birthday(date, today)?;
    Ok(Output::Message(BIRTHDAY_ADDED))
}

pub fn show_birthday(book: &AddressBook, args: &[String]) -> Result<Output> {
    let [name] = take_args(args)?;
    let birthday = find(book, name)?.birthday().copied();
    Ok(Output::Birthday(birthday))
}

pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> Output {
    Output::Upcoming(book.upcoming_birthdays(today, window_days))
}
