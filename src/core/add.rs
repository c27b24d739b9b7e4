use crate::models::{DayRecord, Scope};
use chrono::NaiveDate;

/// Business logic for the `add` command: append an empty activity line.
pub struct AddLogic;

impl AddLogic {
    /// Find or create the record of `day`, find or create the scope `scope`
    /// (default name `x`, one day), then append an empty line to it.
    ///
    /// Returns a new list; `days` is left untouched.
    pub fn apply(days: &[DayRecord], day: NaiveDate, scope: Option<&str>) -> Vec<DayRecord> {
        let mut copy = days.to_vec();
        let name = scope.unwrap_or(Scope::DEFAULT_NAME);

        let idx = match copy.iter().position(|d| d.date == day) {
            Some(i) => i,
            None => {
                copy.push(DayRecord::new(day));
                copy.len() - 1
            }
        };
        let record = &mut copy[idx];

        if record.scope(name).is_none() {
            record.scopes.push(Scope::new(name));
        }
        if let Some(s) = record.scope_mut(name) {
            s.content.push(String::new());
        }

        copy
    }
}
