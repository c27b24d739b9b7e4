use chrono::{Datelike, NaiveDate};
use ractivity::core::calendar::{materialize, month_bounds};

mod common;
use common::{day, record, scope};

#[test]
fn test_materialize_has_one_entry_per_day() {
    let cases = [
        (2025, 1, 31),
        (2025, 2, 28),
        (2024, 2, 29),
        (2025, 4, 30),
        (2025, 12, 31),
    ];

    for (y, m, expected) in cases {
        let days = materialize(day(y, m, 1), &[]);
        assert_eq!(days.len(), expected, "{y}-{m}");
        assert_eq!(days.first().map(|d| d.date), Some(day(y, m, 1)));
        assert_eq!(days.last().map(|d| d.date), Some(day(y, m, expected as u32)));
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
        assert!(days.iter().all(|d| d.scopes.is_empty()));
    }
}

#[test]
fn test_materialize_accepts_any_day_of_the_month() {
    let days = materialize(day(2025, 3, 17), &[]);
    assert_eq!(days.len(), 31);
    assert_eq!(days[0].date, day(2025, 3, 1));
}

#[test]
fn test_materialize_merges_saved_scopes_verbatim() {
    let saved = vec![
        record(
            day(2025, 3, 5),
            vec![
                scope("Acme", 0.5, &["meeting", ""]),
                scope("Globex", 0.25, &["review"]),
            ],
        ),
        record(day(2025, 3, 20), vec![scope("Acme", 1.0, &["deploy"])]),
    ];

    let days = materialize(day(2025, 3, 1), &saved);

    assert_eq!(days[4].date, day(2025, 3, 5));
    assert_eq!(days[4].scopes, saved[0].scopes);
    assert_eq!(days[19].scopes, saved[1].scopes);

    let others = days
        .iter()
        .filter(|d| d.date.day() != 5 && d.date.day() != 20);
    assert!(others.into_iter().all(|d| d.scopes.is_empty()));
}

#[test]
fn test_materialize_ignores_other_months() {
    let saved = vec![
        record(day(2025, 2, 28), vec![scope("Acme", 1.0, &["a"])]),
        record(day(2024, 3, 5), vec![scope("Acme", 1.0, &["b"])]),
        record(day(2025, 4, 1), vec![scope("Acme", 1.0, &["c"])]),
    ];

    let days = materialize(day(2025, 3, 1), &saved);
    assert!(days.iter().all(|d| d.scopes.is_empty()));
}

#[test]
fn test_materialize_duplicate_day_keeps_first_record() {
    let saved = vec![
        record(day(2025, 3, 5), vec![scope("First", 1.0, &["a"])]),
        record(day(2025, 3, 5), vec![scope("Second", 2.0, &["b"])]),
    ];

    let days = materialize(day(2025, 3, 1), &saved);
    assert_eq!(days[4].scopes.len(), 1);
    assert_eq!(days[4].scopes[0].name, "First");
}

#[test]
fn test_materialize_does_not_alias_saved_data() {
    let saved = vec![record(day(2025, 3, 5), vec![scope("Acme", 1.0, &["a"])])];

    let mut days = materialize(day(2025, 3, 1), &saved);
    days[4].scopes[0].content.push("changed".into());
    days[4].scopes[0].time = 9.0;

    assert_eq!(saved[0].scopes[0].content, vec!["a".to_string()]);
    assert_eq!(saved[0].scopes[0].time, 1.0);
}

#[test]
fn test_month_bounds() {
    assert_eq!(
        month_bounds(day(2024, 2, 10)),
        (day(2024, 2, 1), day(2024, 2, 29))
    );
    let (first, last): (NaiveDate, NaiveDate) = month_bounds(day(2025, 12, 31));
    assert_eq!((first.day(), last.day()), (1, 31));
}
