//! Persisted state container.
//!
//! Loaded once from a [`Storage`]; every setter writes its key back right
//! away. Reads never fail: a missing, unreadable or unparsable key falls back
//! to its default on its own. Saved days that cannot be read are kept aside
//! and written back untouched with the rest of the list.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::{StoredEntry, read_entry};
use crate::models::{Currency, DayRecord};
use crate::store::{Persisted, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const KEY_DATA: &str = "data";
pub const KEY_RATE: &str = "rate";
pub const KEY_CURRENCY: &str = "currency";
pub const KEY_TAXES: &str = "taxes";

pub const DEFAULT_RATE: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedState {
    pub days: Vec<DayRecord>,
    pub rate: f64,
    pub currency: String,
    pub taxes: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            days: Vec::new(),
            rate: DEFAULT_RATE,
            currency: Currency::DEFAULT_CODE.to_string(),
            taxes: false,
        }
    }
}

pub struct ActivityState<S: Storage> {
    storage: S,
    state: PersistedState,
    /// Raw entries of `data` that are not readable day records.
    unreadable: Vec<Value>,
    /// Failed writes (key, error), not yet reported.
    write_errors: Vec<(&'static str, AppError)>,
}

fn read_key<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = storage.get(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

impl<S: Storage> ActivityState<S> {
    pub fn load(storage: S) -> Self {
        let defaults = PersistedState::default();

        let raw: Vec<Value> = read_key(&storage, KEY_DATA).unwrap_or_default();
        let mut days = Vec::with_capacity(raw.len());
        let mut unreadable = Vec::new();
        for entry in raw {
            match read_entry(entry) {
                Ok(day) => days.push(day),
                Err(kept) => unreadable.push(kept),
            }
        }

        let state = PersistedState {
            days,
            rate: read_key::<S, f64>(&storage, KEY_RATE)
                .filter(|r| r.is_finite())
                .unwrap_or(defaults.rate),
            currency: read_key(&storage, KEY_CURRENCY).unwrap_or(defaults.currency),
            taxes: read_key(&storage, KEY_TAXES).unwrap_or(defaults.taxes),
        };

        Self {
            storage,
            state,
            unreadable,
            write_errors: Vec::new(),
        }
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.state.days
    }

    pub fn rate(&self) -> f64 {
        self.state.rate
    }

    pub fn currency(&self) -> &str {
        &self.state.currency
    }

    pub fn taxes(&self) -> bool {
        self.state.taxes
    }

    /// Saved entries that could not be read as days. They are not shown, but
    /// stay in storage.
    pub fn unreadable_days(&self) -> usize {
        self.unreadable.len()
    }

    /// Writes that failed since the last call. The in-memory state is kept.
    pub fn take_write_errors(&mut self) -> Vec<(&'static str, AppError)> {
        std::mem::take(&mut self.write_errors)
    }

    fn record_write(&mut self, key: &'static str, result: AppResult<()>) {
        if let Err(e) = result {
            self.write_errors.push((key, e));
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the day list with `f(current)` and save it.
    ///
    /// Returns whether the list actually changed.
    pub fn update_days<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&[DayRecord]) -> Vec<DayRecord>,
    {
        let next = f(&self.state.days);
        let changed = next != self.state.days;
        self.state.days = next;

        let entries: Vec<StoredEntry> = self
            .state
            .days
            .iter()
            .map(StoredEntry::Day)
            .chain(self.unreadable.iter().map(StoredEntry::Raw))
            .collect();
        let result = self.storage.put(KEY_DATA, Persisted::Present(&entries));
        drop(entries);
        self.record_write(KEY_DATA, result);

        changed
    }

    /// `None` or a non-finite rate removes the stored key; the rate then
    /// reads back as the default.
    pub fn set_rate(&mut self, rate: Option<f64>) {
        match rate.filter(|r| r.is_finite()) {
            Some(r) => {
                self.state.rate = r;
                let result = self.storage.put(KEY_RATE, Persisted::Present(&r));
                self.record_write(KEY_RATE, result);
            }
            None => {
                self.state.rate = DEFAULT_RATE;
                let result = self.storage.put::<f64>(KEY_RATE, Persisted::Absent);
                self.record_write(KEY_RATE, result);
            }
        }
    }

    pub fn set_currency(&mut self, code: &str) {
        self.state.currency = code.to_string();
        let result = self
            .storage
            .put(KEY_CURRENCY, Persisted::Present(&self.state.currency));
        self.record_write(KEY_CURRENCY, result);
    }

    pub fn set_taxes(&mut self, taxes: bool) {
        self.state.taxes = taxes;
        let result = self.storage.put(KEY_TAXES, Persisted::Present(&taxes));
        self.record_write(KEY_TAXES, result);
    }
}
