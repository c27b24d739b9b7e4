use ractivity::core::add::AddLogic;
use ractivity::core::del::DeleteLogic;
use ractivity::core::edit::{EditLogic, parse_quantity};
use ractivity::models::Scope;

mod common;
use common::{day, record, scope};

#[test]
fn test_add_on_empty_day_creates_default_scope() {
    let d = day(2025, 3, 5);
    let days = AddLogic::apply(&[], d, None);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, d);
    assert_eq!(days[0].scopes, vec![scope(Scope::DEFAULT_NAME, 1.0, &[""])]);
    assert_eq!(days[0].scopes[0].name, "x");
}

#[test]
fn test_add_to_existing_scope_appends_line() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 0.5, &["meeting"])])];

    let days = AddLogic::apply(&saved, d, Some("Acme"));

    assert_eq!(days[0].scopes.len(), 1);
    assert_eq!(days[0].scopes[0].content, vec!["meeting", ""]);
    assert_eq!(days[0].scopes[0].time, 0.5);
    // original untouched
    assert_eq!(saved[0].scopes[0].content, vec!["meeting"]);
}

#[test]
fn test_add_named_scope_next_to_existing_one() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 0.5, &["meeting"])])];

    let days = AddLogic::apply(&saved, d, Some("Globex"));

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].scopes.len(), 2);
    assert_eq!(days[0].scopes[1], scope("Globex", 1.0, &[""]));
}

#[test]
fn test_add_twice_never_duplicates_scope() {
    let d = day(2025, 3, 5);
    let once = AddLogic::apply(&[], d, None);
    let twice = AddLogic::apply(&once, d, None);

    assert_eq!(twice.len(), 1);
    assert_eq!(twice[0].scopes.len(), 1);
    assert_eq!(twice[0].scopes[0].content, vec!["", ""]);
}

#[test]
fn test_delete_middle_line_keeps_order() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 1.0, &["a", "b", "c"])])];

    let days = DeleteLogic::apply(&saved, d, "Acme", 1);

    assert_eq!(days[0].scopes[0].content, vec!["a", "c"]);
}

#[test]
fn test_delete_last_line_removes_scope() {
    let d = day(2025, 3, 5);
    let saved = vec![record(
        d,
        vec![scope("Acme", 1.0, &["only"]), scope("Globex", 1.0, &["g"])],
    )];

    let days = DeleteLogic::apply(&saved, d, "Acme", 0);

    assert_eq!(days[0].scopes.len(), 1);
    assert_eq!(days[0].scopes[0].name, "Globex");
}

#[test]
fn test_delete_last_scope_removes_day() {
    let d = day(2025, 3, 5);
    let other = day(2025, 3, 6);
    let saved = vec![
        record(d, vec![scope("Acme", 1.0, &["only"])]),
        record(other, vec![scope("Acme", 1.0, &["kept"])]),
    ];

    let days = DeleteLogic::apply(&saved, d, "Acme", 0);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, other);
}

#[test]
fn test_delete_misses_are_silent() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 1.0, &["a"])])];

    assert_eq!(DeleteLogic::apply(&saved, day(2025, 3, 6), "Acme", 0), saved);
    assert_eq!(DeleteLogic::apply(&saved, d, "Nope", 0), saved);
    assert_eq!(DeleteLogic::apply(&saved, d, "Acme", 5), saved);
}

#[test]
fn test_set_time_coerces_non_finite_to_zero() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 1.0, &["a"])])];

    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let days = EditLogic::set_time(&saved, d, "Acme", value);
        assert_eq!(days[0].scopes[0].time, 0.0);
    }

    let days = EditLogic::set_time(&saved, d, "Acme", parse_quantity("3.5"));
    assert_eq!(days[0].scopes[0].time, 3.5);

    let days = EditLogic::set_time(&saved, d, "Acme", parse_quantity("abc"));
    assert_eq!(days[0].scopes[0].time, 0.0);
}

#[test]
fn test_set_time_keeps_negative_values() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 1.0, &["a"])])];

    let days = EditLogic::set_time(&saved, d, "Acme", -0.5);
    assert_eq!(days[0].scopes[0].time, -0.5);
}

#[test]
fn test_parse_quantity() {
    assert_eq!(parse_quantity(" 0.25 "), 0.25);
    assert!(parse_quantity("").is_nan());
    assert!(parse_quantity("1,5").is_nan());
}

#[test]
fn test_rename_in_place() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("x", 1.0, &["a"])])];

    let days = EditLogic::rename(&saved, d, "x", "Acme");

    assert_eq!(days[0].scopes[0].name, "Acme");
    assert_eq!(days[0].scopes[0].content, vec!["a"]);
    assert_eq!(saved[0].scopes[0].name, "x");
}

#[test]
fn test_rename_onto_existing_name_is_rejected() {
    let d = day(2025, 3, 5);
    let saved = vec![record(
        d,
        vec![scope("x", 1.0, &["a"]), scope("Acme", 0.5, &["b"])],
    )];

    let days = EditLogic::rename(&saved, d, "x", "Acme");
    assert_eq!(days, saved);
}

#[test]
fn test_set_line_replaces_text() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 1.0, &["", "b"])])];

    let days = EditLogic::set_line(&saved, d, "Acme", 0, "kick-off");
    assert_eq!(days[0].scopes[0].content, vec!["kick-off", "b"]);

    let untouched = EditLogic::set_line(&saved, d, "Acme", 2, "nope");
    assert_eq!(untouched, saved);
}

#[test]
fn test_edit_misses_are_silent() {
    let d = day(2025, 3, 5);
    let saved = vec![record(d, vec![scope("Acme", 1.0, &["a"])])];
    let other = day(2025, 4, 1);

    assert_eq!(EditLogic::set_time(&saved, other, "Acme", 2.0), saved);
    assert_eq!(EditLogic::rename(&saved, d, "Nope", "New"), saved);
    assert!(EditLogic::set_line(&[], d, "Acme", 0, "t").is_empty());
}
