#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use ractivity::models::{DayRecord, Scope};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rac() -> Command {
    cargo_bin_cmd!("ractivity")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ractivity.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    rac()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn scope(name: &str, time: f64, content: &[&str]) -> Scope {
    Scope {
        name: name.to_string(),
        time,
        content: content.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn record(date: NaiveDate, scopes: Vec<Scope>) -> DayRecord {
    DayRecord { date, scopes }
}
