//! Calendar materializer: full month grid with saved scopes merged in.

use crate::models::DayRecord;
use crate::utils::date::{all_days_of_month, first_of_month};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// First and last day of the month containing `month`.
pub fn month_bounds(month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(month);
    let last = all_days_of_month(month.year(), month.month())
        .last()
        .copied()
        .unwrap_or(first);
    (first, last)
}

/// One record per calendar day of the month containing `month`, ascending.
///
/// Each day carries a copy of the scopes of the first saved record with the
/// same date; days without a saved record get no scopes. Mutating the result
/// never touches `days`.
pub fn materialize(month: NaiveDate, days: &[DayRecord]) -> Vec<DayRecord> {
    let (first, last) = month_bounds(month);

    let mut saved: HashMap<NaiveDate, &DayRecord> = HashMap::new();
    for record in days.iter().filter(|d| d.date >= first && d.date <= last) {
        // first match wins
        saved.entry(record.date).or_insert(record);
    }

    all_days_of_month(month.year(), month.month())
        .into_iter()
        .map(|date| DayRecord {
            date,
            scopes: saved
                .get(&date)
                .map(|r| r.scopes.clone())
                .unwrap_or_default(),
        })
        .collect()
}
