use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

/// The twelve months (first day of each) of `year`.
pub fn year_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|m| NaiveDate::from_ymd_opt(year, m, 1))
        .collect()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a month selector.
///
/// - `YYYY-MM` → that month
/// - `MM` / `M` → that month of `reference`'s year
///
/// Returns the first day of the month.
pub fn parse_month(s: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some((y, m)) = s.split_once('-') {
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    let month: u32 = s.parse().ok()?;
    NaiveDate::from_ymd_opt(reference.year(), month, 1)
}

/// Lenient reader for dates found in persisted records.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to the local
/// calendar day, as they were written from a local midnight) and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Time of day is dropped.
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
