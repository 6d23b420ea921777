use super::birthdays::BIRTHDAY_ADDED;
use super::contacts::{CONTACT_ADDED, CONTACT_DELETED, CONTACT_RENAMED, CONTACT_UPDATED};
use super::output::{GOODBYE, GREETING, NO_BIRTHDAY, NO_UPCOMING};
use super::{help_text, parse_input, Command, Output, Session, COMMANDS};
use crate::error::CommandError;
use crate::history::History;
use crate::repl::{run_session, PROMPT, WELCOME};
use chrono::NaiveDate;
use rolodex_core::{AddressBook, CoreError, EMPTY_BOOK};
use std::io::Cursor;

fn today() -> NaiveDate {
    // Monday
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn session() -> Session {
    Session::new(AddressBook::default(), 7)
}

fn run(session: &mut Session, line: &str) -> Result<Output, CommandError> {
    session.handle_line(line, today())
}

fn text(session: &mut Session, line: &str) -> String {
    match run(session, line) {
        Ok(output) => output.to_text().unwrap_or_default(),
        Err(err) => err.to_string(),
    }
}

#[test]
fn parse_input_lowercases_command_only() {
    let (command, args) = parse_input("  ADD Ada 0501234567 ").unwrap();
    assert_eq!(command, "add");
    assert_eq!(args, vec!["Ada".to_string(), "0501234567".to_string()]);
    assert!(parse_input("   ").is_none());
}

#[test]
fn close_and_exit_are_aliases() {
    assert_eq!(Command::from_name("close"), Some(Command::Exit));
    assert_eq!(Command::from_name("exit"), Some(Command::Exit));
    assert_eq!(Command::from_name("ADD"), None);
}

#[test]
fn help_lists_every_command() {
    let help = help_text();
    assert_eq!(help.lines().count(), COMMANDS.len());
    assert!(help.contains("Usage: add [name] [phone] - Add a new contact or phone number"));
}

#[test]
fn add_creates_then_updates_contact() {
    let mut session = session();
    assert_eq!(text(&mut session, "add Ada 0501234567"), CONTACT_ADDED);
    assert_eq!(text(&mut session, "add Ada 0671234567"), CONTACT_UPDATED);
    assert_eq!(session.book().len(), 1);
    assert_eq!(
        text(&mut session, "phone Ada"),
        "0501234567\n0671234567"
    );
}

#[test]
fn add_rejects_duplicate_and_invalid_phones() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    assert_eq!(
        text(&mut session, "add Ada 050-123-4567"),
        "This phone number already exists for this contact"
    );
    assert_eq!(
        text(&mut session, "add Bob 123"),
        "Phone number must be exactly 10 digits"
    );
    assert!(session.book().find("Bob").is_none());
}

#[test]
fn missing_arguments_share_one_message() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    session.mark_saved();
    for line in [
        "add Ada",
        "change Ada 0501234567",
        "phone",
        "remove-phone Ada",
        "add-birthday Ada",
        "show-birthday",
        "rename Ada",
        "delete",
    ] {
        let err = run(&mut session, line).unwrap_err();
        assert!(
            matches!(err, CommandError::MissingNameAndPhone),
            "{line} should report missing arguments"
        );
        assert_eq!(err.to_string(), "Give me name and phone please.");
    }
    assert!(!session.is_dirty());
    assert_eq!(session.book().len(), 1);
}

#[test]
fn change_replaces_phone() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    assert_eq!(
        text(&mut session, "change Ada 0501234567 0931112233"),
        CONTACT_UPDATED
    );
    assert_eq!(text(&mut session, "phone Ada"), "0931112233");
    assert_eq!(
        text(&mut session, "change Ada 0501234567 0931112233"),
        "Phone number not found for this contact"
    );
    assert_eq!(
        text(&mut session, "change Bob 0501234567 0931112233"),
        "Contact Bob not found"
    );
}

#[test]
fn all_lists_records_or_reports_empty_book() {
    let mut session = session();
    assert_eq!(text(&mut session, "all"), EMPTY_BOOK);
    run(&mut session, "add Ada 0501234567").unwrap();
    run(&mut session, "add Bob 0671234567").unwrap();
    assert_eq!(
        text(&mut session, "all"),
        "Contact name: Ada; phones: 0501234567; birthday: not added yet\n\
         Contact name: Bob; phones: 0671234567; birthday: not added yet"
    );
}

#[test]
fn birthday_can_be_added_once() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    assert_eq!(text(&mut session, "show-birthday Ada"), NO_BIRTHDAY);
    assert_eq!(text(&mut session, "add-birthday Ada 10.12.1815"), BIRTHDAY_ADDED);
    assert_eq!(text(&mut session, "show-birthday Ada"), "10.12.1815");
    assert_eq!(
        text(&mut session, "add-birthday Ada 11.12.1815"),
        "Birthday already exists for this contact"
    );
}

#[test]
fn birthday_rejects_bad_format_and_future_dates() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    assert_eq!(
        text(&mut session, "add-birthday Ada 1815-12-10"),
        "Invalid date or its format. DD.MM.YYYY should be used"
    );
    assert_eq!(
        text(&mut session, "add-birthday Ada 11.06.2024"),
        "Birthday cannot be in the future. Today is 10.06.2024"
    );
}

#[test]
fn birthdays_roll_weekend_to_monday() {
    let mut session = session();
    assert_eq!(text(&mut session, "birthdays"), NO_UPCOMING);
    run(&mut session, "add Ada 0501234567").unwrap();
    // 15.06.2024 is a Saturday
    run(&mut session, "add-birthday Ada 15.06.1990").unwrap();
    run(&mut session, "add Bob 0671234567").unwrap();
    run(&mut session, "add-birthday Bob 12.06.1985").unwrap();
    run(&mut session, "add Eve 0931234567").unwrap();
    run(&mut session, "add-birthday Eve 01.07.1985").unwrap();

    assert_eq!(
        text(&mut session, "birthdays"),
        "Name: Ada, congratulation date: 17.06.2024\n\
         Name: Bob, congratulation date: 12.06.2024"
    );
}

#[test]
fn rename_and_delete_contacts() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    run(&mut session, "add Bob 0671234567").unwrap();
    assert_eq!(text(&mut session, "rename Ada Bob"), "Contact Bob already exists");
    assert_eq!(text(&mut session, "rename Ada Augusta"), CONTACT_RENAMED);
    assert!(session.book().find("Augusta").is_some());
    assert_eq!(text(&mut session, "delete Bob"), CONTACT_DELETED);
    assert_eq!(text(&mut session, "delete Bob"), "Contact Bob not found");
    assert_eq!(session.book().len(), 1);
}

#[test]
fn unknown_command_lists_available_commands() {
    let mut session = session();
    let err = run(&mut session, "dance").unwrap_err();
    assert!(matches!(err, CommandError::UnknownCommand(ref name) if name == "dance"));
    let message = err.to_string();
    assert!(message.starts_with("Invalid command. Available commands:\n"));
    assert!(message.ends_with(&help_text()));
}

#[test]
fn blank_line_does_nothing() {
    let mut session = session();
    assert_eq!(run(&mut session, "   ").unwrap(), Output::Nothing);
    assert!(session.is_running());
}

#[test]
fn hello_and_exit() {
    let mut session = session();
    assert_eq!(text(&mut session, "hello"), GREETING);
    assert_eq!(text(&mut session, "close"), GOODBYE);
    assert!(!session.is_running());
}

#[test]
fn only_successful_mutations_mark_dirty() {
    let mut session = session();
    run(&mut session, "all").unwrap();
    assert!(!session.is_dirty());
    let _ = run(&mut session, "add Ada 1");
    assert!(!session.is_dirty());
    run(&mut session, "add Ada 0501234567").unwrap();
    assert!(session.is_dirty());
    session.mark_saved();
    assert!(!session.is_dirty());
}

#[test]
fn failed_command_keeps_core_error() {
    let mut session = session();
    let err = run(&mut session, "phone Ghost").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Core(CoreError::RecordNotFound(ref name)) if name == "Ghost"
    ));
}

#[test]
fn json_output_uses_dtos() {
    let mut session = session();
    run(&mut session, "add Ada 0501234567").unwrap();
    run(&mut session, "add-birthday Ada 10.12.1815").unwrap();
    let value = run(&mut session, "all").unwrap().to_json();
    assert_eq!(value[0]["name"], "Ada");
    assert_eq!(value[0]["phones"][0], "0501234567");
    assert_eq!(value[0]["birthday"], "10.12.1815");
}

#[test]
fn interactive_session_runs_until_exit() {
    let mut session = session();
    let input = Cursor::new("hello\nadd Ada 0501234567\nnope\nexit\nall\n");
    let mut output = Vec::new();
    let mut history = History::disabled();

    run_session(&mut session, input, &mut output, &mut history, today).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.starts_with(WELCOME));
    assert!(printed.contains(PROMPT));
    assert!(printed.contains(GREETING));
    assert!(printed.contains(CONTACT_ADDED));
    assert!(printed.contains("Invalid command. Available commands:"));
    assert!(printed.trim_end().ends_with(GOODBYE));
    assert!(!printed.contains(EMPTY_BOOK));
    assert!(session.is_dirty());
}

#[test]
fn interactive_session_stops_at_end_of_input() {
    let mut session = session();
    let mut output = Vec::new();
    let mut history = History::disabled();

    run_session(&mut session, Cursor::new(""), &mut output, &mut history, today).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.ends_with(&format!("{PROMPT}\n{GOODBYE}\n")));
    assert!(session.is_running());
}
