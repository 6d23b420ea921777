use crate::commands::output::GREETING;
use crate::commands::{birthdays, contacts, parse_input, Command, Output};
use crate::error::CommandError;
use chrono::NaiveDate;
use rolodex_core::AddressBook;
use tracing::debug;

/// One user's address book plus the state of the command loop around it.
pub struct Session {
    book: AddressBook,
    window_days: i64,
    dirty: bool,
    running: bool,
}

impl Session {
    pub fn new(book: AddressBook, window_days: i64) -> Self {
        Self {
            book,
            window_days,
            dirty: false,
            running: true,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> Result<Output, CommandError> {
        let Some((name, args)) = parse_input(line) else {
            return Ok(Output::Nothing);
        };
        let command = Command::from_name(&name).ok_or(CommandError::UnknownCommand(name))?;
        debug!(?command, args = args.len(), "dispatching command");

        let book = &mut self.book;
        let output = match command {
            Command::Add => contacts::add(book, &args)?,
            Command::Change => contacts::change(book, &args)?,
            Command::Phone => contacts::phone(book, &args)?,
            Command::RemovePhone => contacts::remove_phone(book, &args)?,
            Command::AddBirthday => birthdays::add_birthday(book, &args, today)?,
            Command::ShowBirthday => birthdays::show_birthday(book, &args)?,
            Command::All => contacts::all(book),
            Command::Birthdays => birthdays::birthdays(book, today, self.window_days),
            Command::Rename => contacts::rename(book, &args)?,
            Command::Delete => contacts::delete(book, &args)?,
            Command::Hello => Output::Message(GREETING),
            Command::Help => Output::Help,
            Command::Exit => {
                self.running = false;
                Output::Goodbye
            }
        };

        if command.mutates() {
            self.dirty = true;
        }
        Ok(output)
    }
}
