use crate::domain::Record;
use crate::error::CoreError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: NaiveDate,
    pub congratulation_date: NaiveDate,
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// Birthdays falling within `window_days` from `today` (inclusive on both
/// ends), in record order.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.value();
            let anchored = next_occurrence(birthday, today);
            let delta = (anchored - today).num_days();
            if !(0..=window_days).contains(&delta) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                birthday: anchored,
                congratulation_date: congratulation_date(anchored),
            })
        })
        .collect()
}

/// First anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Weekend dates move to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// Feb 29 is observed on Feb 28 in non-leap years.
fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = (birthday.month(), birthday.day());
    let day = if month == 2 && day == 29 && !is_leap_year(year) {
        28
    } else {
        day
    };
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(birthday)
}
