use chrono::{Duration, NaiveDate};
use cremaet_bot::utils::datetime::{format_date, is_payday, next_occurrence};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_next_occurrence_from_a_friday() {
    // 2024-05-10 is a Friday
    assert_eq!(next_occurrence(date(2024, 5, 10)), date(2024, 5, 17));
}

#[test]
fn test_next_occurrence_from_a_wednesday() {
    // 2024-05-08 is a Wednesday; the next Friday is 2024-05-10
    assert_eq!(next_occurrence(date(2024, 5, 8)), date(2024, 5, 10));
}

#[test]
fn test_next_occurrence_is_always_a_strictly_later_friday() {
    let mut day = date(2024, 1, 1);
    for _ in 0..60 {
        let next = next_occurrence(day);
        assert!(is_payday(next), "{next} is not a Friday");
        assert!(next > day, "{next} is not after {day}");
        assert!(next - day <= Duration::days(7));
        day += Duration::days(1);
    }
}

#[test]
fn test_weekly_step_composes_from_fridays() {
    // From a Friday, applying the calculator twice lands exactly two weeks
    // out: next(next(d)) == next(d) + 7 days.
    let friday = date(2024, 5, 10);
    let once = next_occurrence(friday);
    assert_eq!(next_occurrence(once), once + Duration::days(7));
}

#[test]
fn test_year_boundary() {
    // 2024-12-27 is the last Friday of 2024
    assert_eq!(next_occurrence(date(2024, 12, 27)), date(2025, 1, 3));
    assert_eq!(next_occurrence(date(2024, 12, 30)), date(2025, 1, 3));
}

#[test]
fn test_format_date_localized() {
    assert_eq!(format_date(date(2024, 5, 10)), "10/05/2024");
}
