use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
