//! One handler per subcommand, plus the plumbing they share.

pub mod add;
pub mod bill;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod rename;
pub mod set;
pub mod time;

use crate::cli::render;
use crate::config::Config;
use crate::core::calendar::materialize;
use crate::core::state::ActivityState;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStorage;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub(crate) type State = ActivityState<SqliteStorage>;

/// Open the configured database and load the persisted state.
pub(crate) fn open_state(cfg: &Config) -> AppResult<State> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let storage = SqliteStorage::open(&cfg.database, &cfg.namespace)?;
    let state = ActivityState::load(storage);

    if state.unreadable_days() > 0 {
        warning(format!(
            "{} saved day(s) could not be read; they are kept but not shown.",
            state.unreadable_days()
        ));
    }

    Ok(state)
}

pub(crate) fn parse_day(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// 1-based line number from the CLI → 0-based index.
pub(crate) fn line_index(line: usize) -> AppResult<usize> {
    line.checked_sub(1).ok_or(AppError::InvalidLine(line))
}

/// `--month` value, or the current month.
pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<NaiveDate> {
    let today = date::today();
    match month {
        Some(m) => date::parse_month(m, today).ok_or_else(|| AppError::InvalidMonth(m.clone())),
        None => Ok(date::first_of_month(today)),
    }
}

/// Record a change in the internal log (non blocking).
pub(crate) fn audit(state: &State, operation: &str, target: &str, message: &str) {
    ttlog_quiet(&state.storage().pool().conn, operation, target, message);
}

/// Warn about every write that did not reach the database.
pub(crate) fn report_write_errors(state: &mut State) {
    for (key, e) in state.take_write_errors() {
        warning(format!("Could not save '{key}': {e}"));
    }
}

/// Outcome message of a mutation, then the affected day.
pub(crate) fn report(state: &mut State, day: NaiveDate, changed: bool, done: &str, cfg: &Config) {
    report_write_errors(state);

    if changed {
        success(done);
    } else {
        info(format!("Nothing changed for {day}."));
    }

    let shown: Vec<_> = materialize(day, state.days())
        .into_iter()
        .filter(|d| d.date == day)
        .collect();
    println!();
    print!("{}", render::timesheet(&shown, cfg));
}
