use crate::models::DayRecord;
use chrono::NaiveDate;

/// In-place edits of an existing scope: quantity, name, activity line.
pub struct EditLogic;

/// Number input coercion: `"3.5"` → 3.5, anything unparsable → NaN.
pub fn parse_quantity(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Copy `days` and run `edit` on the first scope named `scope` of `day`.
fn edit_scope<F>(days: &[DayRecord], day: NaiveDate, scope: &str, edit: F) -> Vec<DayRecord>
where
    F: FnOnce(&mut DayRecord, usize),
{
    let mut copy = days.to_vec();

    if let Some(record) = copy.iter_mut().find(|d| d.date == day)
        && let Some(idx) = record.scopes.iter().position(|s| s.name == scope)
    {
        edit(record, idx);
    }

    copy
}

impl EditLogic {
    /// Non-finite values (NaN, ±∞) become 0. Negative values are kept.
    pub fn set_time(days: &[DayRecord], day: NaiveDate, scope: &str, value: f64) -> Vec<DayRecord> {
        let value = if value.is_finite() { value } else { 0.0 };
        edit_scope(days, day, scope, |record, idx| {
            record.scopes[idx].time = value;
        })
    }

    /// Rename `scope` to `new_name`. Rejected when another scope of the same
    /// day already uses `new_name`.
    pub fn rename(
        days: &[DayRecord],
        day: NaiveDate,
        scope: &str,
        new_name: &str,
    ) -> Vec<DayRecord> {
        edit_scope(days, day, scope, |record, idx| {
            let taken = record
                .scopes
                .iter()
                .enumerate()
                .any(|(i, s)| i != idx && s.name == new_name);
            if !taken {
                record.scopes[idx].name = new_name.to_string();
            }
        })
    }

    /// Replace activity line `line` (0-based). Out of range: no change.
    pub fn set_line(
        days: &[DayRecord],
        day: NaiveDate,
        scope: &str,
        line: usize,
        text: &str,
    ) -> Vec<DayRecord> {
        edit_scope(days, day, scope, |record, idx| {
            if let Some(entry) = record.scopes[idx].content.get_mut(line) {
                *entry = text.to_string();
            }
        })
    }
}
