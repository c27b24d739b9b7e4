use super::scope::Scope;
use crate::utils::date::parse_stored_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Saved work for one calendar day.
///
/// Serialized as `{ "date": "YYYY-MM-DD", "scopes": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            scopes: Vec::new(),
        }
    }

    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.name == name)
    }

    pub fn scope_mut(&mut self, name: &str) -> Option<&mut Scope> {
        self.scopes.iter_mut().find(|s| s.name == name)
    }

    pub fn total_time(&self) -> f64 {
        self.scopes.iter().map(|s| s.time).sum()
    }
}

/// Day record as found in storage, before its date is validated.
///
/// `date` is kept as a raw JSON value so one malformed entry does not spoil
/// the whole list.
#[derive(Debug, Deserialize)]
pub struct StoredDayRecord {
    #[serde(default)]
    pub date: serde_json::Value,
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

impl StoredDayRecord {
    pub fn into_record(self) -> Option<DayRecord> {
        let date = self.date.as_str().and_then(parse_stored_date)?;
        Some(DayRecord {
            date,
            scopes: self.scopes,
        })
    }
}

/// Read one raw entry of the saved day list.
///
/// An entry that is not a day record, or whose date cannot be read, is
/// handed back untouched in `Err`.
pub fn read_entry(raw: serde_json::Value) -> Result<DayRecord, serde_json::Value> {
    match StoredDayRecord::deserialize(&raw) {
        Ok(stored) => stored.into_record().ok_or(raw),
        Err(_) => Err(raw),
    }
}

/// One element of the day list as written back: a known day, or an entry
/// kept verbatim because it could not be read.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StoredEntry<'a> {
    Day(&'a DayRecord),
    Raw(&'a serde_json::Value),
}
