use crate::error::CommandError;
use anyhow::Result;
use rolodex_config::AppConfig;
use rolodex_store::Store;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod birthdays;
pub mod contacts;
pub mod output;
pub mod session;

#[cfg(test)]
mod tests;

pub use output::Output;
pub use session::Session;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
    pub history_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    RemovePhone,
    AddBirthday,
    ShowBirthday,
    All,
    Birthdays,
    Rename,
    Delete,
    Hello,
    Exit,
    Help,
}

/// Help listing order.
pub const COMMANDS: [Command; 13] = [
    Command::Add,
    Command::Change,
    Command::Phone,
    Command::RemovePhone,
    Command::AddBirthday,
    Command::ShowBirthday,
    Command::All,
    Command::Birthdays,
    Command::Rename,
    Command::Delete,
    Command::Hello,
    Command::Exit,
    Command::Help,
];

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "remove-phone" => Command::RemovePhone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "all" => Command::All,
            "birthdays" => Command::Birthdays,
            "rename" => Command::Rename,
            "delete" => Command::Delete,
            "hello" => Command::Hello,
            "exit" | "close" => Command::Exit,
            "help" => Command::Help,
            _ => return None,
        };
        Some(command)
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Add => "add [name] [phone]",
            Command::Change => "change [name] [old phone] [new phone]",
            Command::Phone => "phone [name]",
            Command::RemovePhone => "remove-phone [name] [phone]",
            Command::AddBirthday => "add-birthday [name] [DD.MM.YYYY]",
            Command::ShowBirthday => "show-birthday [name]",
            Command::All => "all",
            Command::Birthdays => "birthdays",
            Command::Rename => "rename [name] [new name]",
            Command::Delete => "delete [name]",
            Command::Hello => "hello",
            Command::Exit => "close or exit",
            Command::Help => "help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Add => "Add a new contact or phone number",
            Command::Change => "Change existing phone number",
            Command::Phone => "Show phone numbers for a contact",
            Command::RemovePhone => "Remove a phone number from a contact",
            Command::AddBirthday => "Add birthday for a contact",
            Command::ShowBirthday => "Show birthday for a contact",
            Command::All => "Show all contacts",
            Command::Birthdays => "Show upcoming birthdays",
            Command::Rename => "Rename a contact",
            Command::Delete => "Delete a contact",
            Command::Hello => "Get a greeting",
            Command::Exit => "Exit the program",
            Command::Help => "Show this list of commands",
        }
    }

    pub fn mutates(self) -> bool {
        matches!(
            self,
            Command::Add
                | Command::Change
                | Command::RemovePhone
                | Command::AddBirthday
                | Command::Rename
                | Command::Delete
        )
    }
}

pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|command| format!("Usage: {} - {}", command.usage(), command.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a line into a lowercased command name and its arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    Some((command, words.map(str::to_string).collect()))
}

/// First `N` arguments; extra arguments are ignored. Any shortfall is
/// reported the same way regardless of which argument is missing.
pub(crate) fn take_args<const N: usize>(
    args: &[String],
) -> std::result::Result<[&str; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingNameAndPhone);
    }
    Ok(std::array::from_fn(|index| args[index].as_str()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
