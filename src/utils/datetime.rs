use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The day of the week the round falls on.
pub const PAYDAY: Weekday = Weekday::Fri;

/// True iff the date falls on the designated weekday.
pub fn is_payday(date: NaiveDate) -> bool {
    date.weekday() == PAYDAY
}

/// The next scheduled date strictly after `last`.
///
/// Advances one day at a time until a Friday is reached, which also covers
/// the anchored case: when `last` is itself a Friday the result is exactly
/// one week later.
pub fn next_occurrence(last: NaiveDate) -> NaiveDate {
    let mut next = last + Duration::days(1);
    while !is_payday(next) {
        next += Duration::days(1);
    }
    next
}

/// Renders a date the way the group reads it: day/month/year.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
