pub mod birthdays;

pub use birthdays::{
    congratulation_date, is_leap_year, next_occurrence, upcoming_birthdays,
    validate_window_days, UpcomingBirthday, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
