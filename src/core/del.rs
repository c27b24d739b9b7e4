use crate::models::DayRecord;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove activity line `line` (0-based) of `scope` on `day`.
    ///
    /// A scope left without lines is removed, and so is a day left without
    /// scopes. Unknown day, scope or line: the copy is returned unchanged.
    pub fn apply(days: &[DayRecord], day: NaiveDate, scope: &str, line: usize) -> Vec<DayRecord> {
        let mut copy = days.to_vec();

        let Some(d_idx) = copy.iter().position(|d| d.date == day) else {
            return copy;
        };
        let record = &mut copy[d_idx];

        let Some(s_idx) = record.scopes.iter().position(|s| s.name == scope) else {
            return copy;
        };
        let content = &mut record.scopes[s_idx].content;

        if line >= content.len() {
            return copy;
        }
        content.remove(line);

        if content.is_empty() {
            record.scopes.remove(s_idx);
        }
        if record.scopes.is_empty() {
            copy.remove(d_idx);
        }

        copy
    }
}
