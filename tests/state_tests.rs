use ractivity::core::add::AddLogic;
use ractivity::core::edit::EditLogic;
use ractivity::core::state::{
    ActivityState, DEFAULT_RATE, KEY_CURRENCY, KEY_DATA, KEY_RATE, KEY_TAXES, PersistedState,
};
use ractivity::db::pool::DbPool;
use ractivity::errors::{AppError, AppResult};
use ractivity::store::{MemoryStorage, Persisted, SqliteStorage, Storage};
use serde_json::{Value, json};

mod common;
use common::{day, record, scope, setup_test_db};

#[test]
fn test_empty_storage_gives_defaults() {
    let state = ActivityState::load(MemoryStorage::new());

    assert_eq!(state.state(), &PersistedState::default());
    assert!(state.days().is_empty());
    assert_eq!(state.rate(), 500.0);
    assert_eq!(state.currency(), "EUR");
    assert!(!state.taxes());
}

#[test]
fn test_corrupt_values_fall_back_per_key() {
    let mut storage = MemoryStorage::new();
    storage.set(KEY_DATA, "{not json").unwrap();
    storage.set(KEY_RATE, "\"abc\"").unwrap();
    storage.set(KEY_CURRENCY, "\"USD\"").unwrap();
    storage.set(KEY_TAXES, "null").unwrap();

    let state = ActivityState::load(storage);

    assert!(state.days().is_empty());
    assert_eq!(state.rate(), DEFAULT_RATE);
    assert_eq!(state.currency(), "USD");
    assert!(!state.taxes());
}

#[test]
fn test_round_trip_through_storage() {
    let mut state = ActivityState::load(MemoryStorage::new());
    let d = day(2025, 3, 5);

    state.update_days(|days| AddLogic::apply(days, d, Some("Acme")));
    state.update_days(|days| EditLogic::set_time(days, d, "Acme", 0.75));
    state.update_days(|days| EditLogic::set_line(days, d, "Acme", 0, "workshop"));
    state.set_rate(Some(650.5));
    state.set_currency("JPY");
    state.set_taxes(true);

    let before = state.state().clone();
    let reloaded = ActivityState::load(state.into_storage());

    assert_eq!(reloaded.state(), &before);
    assert_eq!(
        reloaded.days(),
        &[record(d, vec![scope("Acme", 0.75, &["workshop"])])]
    );
}

#[test]
fn test_every_change_is_written_immediately() {
    let mut state = ActivityState::load(MemoryStorage::new());
    assert!(state.storage().keys().is_empty());

    state.set_taxes(true);
    assert_eq!(state.storage().get(KEY_TAXES).unwrap().as_deref(), Some("true"));

    state.update_days(|days| AddLogic::apply(days, day(2025, 3, 5), None));
    let raw = state.storage().get(KEY_DATA).unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"date":"2025-03-05","scopes":[{"name":"x","time":1.0,"content":[""]}]}]"#
    );
}

#[test]
fn test_update_days_reports_changes() {
    let mut state = ActivityState::load(MemoryStorage::new());
    let d = day(2025, 3, 5);

    assert!(state.update_days(|days| AddLogic::apply(days, d, None)));
    assert!(!state.update_days(|days| EditLogic::rename(days, d, "missing", "y")));
}

#[test]
fn test_absent_rate_removes_the_key() {
    let mut state = ActivityState::load(MemoryStorage::new());

    state.set_rate(Some(700.0));
    assert_eq!(state.storage().get(KEY_RATE).unwrap().as_deref(), Some("700.0"));

    state.set_rate(Some(f64::NAN));
    assert_eq!(state.storage().get(KEY_RATE).unwrap(), None);
    assert_eq!(state.rate(), DEFAULT_RATE);

    state.set_rate(Some(700.0));
    state.set_rate(None);
    assert_eq!(state.storage().get(KEY_RATE).unwrap(), None);
}

#[test]
fn test_lenient_dates_and_null_time() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            KEY_DATA,
            r#"[
                {"date":"2025-03-05T09:30:00","scopes":[{"name":"A","time":null,"content":["a"]}]},
                {"date":"not a date","scopes":[{"name":"B","time":1,"content":["b"]}]},
                {"date":"2025-03-06","scopes":[{"name":"C","time":2,"content":[]}]}
            ]"#,
        )
        .unwrap();

    let state = ActivityState::load(storage);

    assert_eq!(state.unreadable_days(), 1);
    assert_eq!(
        state.days(),
        &[
            record(day(2025, 3, 5), vec![scope("A", 0.0, &["a"])]),
            record(day(2025, 3, 6), vec![scope("C", 2.0, &[])]),
        ]
    );
}

#[test]
fn test_unreadable_entries_survive_writes() {
    let bad_date = json!({
        "date": "garbage",
        "scopes": [{"name": "old", "time": 1, "content": ["precious"]}]
    });
    let not_a_day = json!(42);

    let mut storage = MemoryStorage::new();
    storage
        .set(KEY_DATA, &json!([bad_date, not_a_day]).to_string())
        .unwrap();

    let mut state = ActivityState::load(storage);
    assert!(state.days().is_empty());
    assert_eq!(state.unreadable_days(), 2);

    let d = day(2025, 3, 5);
    state.update_days(|days| AddLogic::apply(days, d, None));

    let raw = state.storage().get(KEY_DATA).unwrap().unwrap();
    let saved: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved.len(), 3);
    assert!(saved.contains(&bad_date));
    assert!(saved.contains(&not_a_day));

    let reloaded = ActivityState::load(state.into_storage());
    assert_eq!(reloaded.days(), &[record(d, vec![scope("x", 1.0, &[""])])]);
    assert_eq!(reloaded.unreadable_days(), 2);
}

#[test]
fn test_time_given_as_text() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            KEY_DATA,
            r#"[{"date":"2025-03-05","scopes":[
                {"name":"A","time":"1.5","content":[]},
                {"name":"B","time":"abc","content":[]}
            ]}]"#,
        )
        .unwrap();

    let state = ActivityState::load(storage);

    assert_eq!(state.unreadable_days(), 0);
    assert_eq!(
        state.days(),
        &[record(
            day(2025, 3, 5),
            vec![scope("A", 1.5, &[]), scope("B", 0.0, &[])]
        )]
    );
}

/// Storage whose writes always fail.
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::other("read-only")))
    }

    fn remove(&mut self, _key: &str) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::other("read-only")))
    }
}

#[test]
fn test_failed_writes_are_collected() {
    let mut state = ActivityState::load(ReadOnlyStorage);

    state.set_taxes(true);
    state.set_rate(None);

    // in-memory values still change
    assert!(state.taxes());
    assert_eq!(state.rate(), DEFAULT_RATE);

    let errors = state.take_write_errors();
    let keys: Vec<&str> = errors.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![KEY_TAXES, KEY_RATE]);
    assert!(errors[0].1.to_string().contains("read-only"));

    assert!(state.take_write_errors().is_empty());
}

#[test]
fn test_put_absent_removes() {
    let mut storage = MemoryStorage::new();
    storage.put(KEY_TAXES, Persisted::Present(&true)).unwrap();
    assert_eq!(storage.keys(), vec![KEY_TAXES]);

    storage.put::<bool>(KEY_TAXES, Persisted::Absent).unwrap();
    assert!(storage.keys().is_empty());
}

#[test]
fn test_sqlite_storage_round_trip() {
    let storage = SqliteStorage::new(DbPool::in_memory().unwrap(), "test").unwrap();
    let mut state = ActivityState::load(storage);
    let d = day(2025, 3, 5);

    state.update_days(|days| AddLogic::apply(days, d, Some("Acme")));
    state.set_currency("USD");

    let before = state.state().clone();
    let reloaded = ActivityState::load(state.into_storage());
    assert_eq!(reloaded.state(), &before);
}

#[test]
fn test_sqlite_storage_upsert_and_remove() {
    let mut storage = SqliteStorage::new(DbPool::in_memory().unwrap(), "one").unwrap();
    storage.set(KEY_RATE, "800").unwrap();
    storage.set(KEY_RATE, "900").unwrap();
    assert_eq!(storage.get(KEY_RATE).unwrap().as_deref(), Some("900"));

    storage.remove(KEY_RATE).unwrap();
    storage.remove(KEY_CURRENCY).unwrap();
    assert_eq!(storage.get(KEY_RATE).unwrap(), None);
}

#[test]
fn test_sqlite_storage_namespaces_are_isolated() {
    let db_path = setup_test_db("namespaces");

    let mut one = SqliteStorage::open(&db_path, "one").unwrap();
    let two = SqliteStorage::open(&db_path, "two").unwrap();

    one.set(KEY_RATE, "800").unwrap();

    assert_eq!(one.get(KEY_RATE).unwrap().as_deref(), Some("800"));
    assert_eq!(two.get(KEY_RATE).unwrap(), None);
}
