use crate::commands::help_text;
use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::{CoreError, CoreErrorKind};
use rolodex_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Failure of a single command line; rendered to the user and never fatal
/// to an interactive session.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Give me name and phone please.")]
    MissingNameAndPhone,
    #[error("Invalid command. Available commands:\n{}", help_text())]
    UnknownCommand(String),
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(command_err) = cause.downcast_ref::<CommandError>() {
            return command_exit_code(command_err);
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return core_exit_code(core_err);
        }
    }
    EXIT_FAILURE
}

fn command_exit_code(err: &CommandError) -> u8 {
    match err {
        CommandError::Core(core) => core_exit_code(core),
        CommandError::MissingNameAndPhone | CommandError::UnknownCommand(_) => {
            EXIT_INVALID_INPUT
        }
    }
}

fn core_exit_code(err: &CoreError) -> u8 {
    match err.kind() {
        CoreErrorKind::NotFound => EXIT_NOT_FOUND,
        CoreErrorKind::Validation | CoreErrorKind::Conflict => EXIT_INVALID_INPUT,
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::Core
        | StoreErrorKind::InvalidData
        | StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::EmptyPath { .. }
        | ConfigError::EmptyLogLevel
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
