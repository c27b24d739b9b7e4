//! Formatting utilities used for CLI outputs.

use crate::config::WeekdayDisplay;
use crate::models::currency::Currency;
use chrono::NaiveDate;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Quantity of days as typed by the user: `1`, `0.5`, `2.25`.
pub fn format_quantity(days: f64) -> String {
    if days == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    format!("{days}")
}

/// Groups the integer part by thousands with a space, French style.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Money amount in the French layout: `12 345,60 €`, `1 500 ¥`.
pub fn format_money(amount: f64, currency: &str) -> String {
    let known = Currency::from_code(currency);
    let decimals = known.map(|c| c.minor_digits()).unwrap_or(2);
    let symbol = known
        .map(|c| c.symbol().to_string())
        .unwrap_or_else(|| currency.to_string());

    let amount = if amount.is_finite() { amount } else { 0.0 };
    let scale = 10u64.pow(decimals);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };

    let int_part = group_thousands(scaled / scale);
    if decimals == 0 {
        format!("{sign}{int_part} {symbol}")
    } else {
        let frac = scaled % scale;
        format!(
            "{sign}{int_part},{frac:0width$} {symbol}",
            width = decimals as usize
        )
    }
}

pub fn format_day(date: NaiveDate, weekday: WeekdayDisplay) -> String {
    match weekday {
        WeekdayDisplay::None => date.format("%d/%m/%Y").to_string(),
        WeekdayDisplay::Short => date.format("%a %d/%m").to_string(),
        WeekdayDisplay::Long => date.format("%A %d/%m/%Y").to_string(),
    }
}

/// Month heading, e.g. `March 2025`.
pub fn format_month(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}
