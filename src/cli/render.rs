//! Text rendering of the timesheet and of the billing breakdown.

use crate::config::Config;
use crate::core::billing::{Amounts, Breakdown};
use crate::models::DayRecord;
use crate::utils::formatting::{bold, format_day};
use crate::utils::table::{Column, Table};
use crate::utils::{format_money, format_quantity};

const ACTIVITY_WIDTH: usize = 60;

fn numbered_lines(content: &[String]) -> String {
    content
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row per scope, one `-` row per day without scopes.
pub fn timesheet(days: &[DayRecord], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 0),
        Column::new("Scope", 24),
        Column::new("Days", 0),
        Column::new("Activities", ACTIVITY_WIDTH),
    ])
    .with_separator(&cfg.separator_char);

    for day in days {
        let date = format_day(day.date, cfg.show_weekday);

        if day.scopes.is_empty() {
            table.add_row(vec![date, "-".into(), String::new(), String::new()]);
            continue;
        }

        for (i, scope) in day.scopes.iter().enumerate() {
            table.add_row(vec![
                if i == 0 { date.clone() } else { String::new() },
                scope.name.clone(),
                format_quantity(scope.time),
                numbered_lines(&scope.content),
            ]);
        }
    }

    table.render()
}

/// Billing table, followed by the billed amount and the net estimate.
pub fn billing(breakdown: &Breakdown, rate: f64, currency: &str, taxes: bool, cfg: &Config) -> String {
    let mut columns = vec![
        Column::new("Scope", 32),
        Column::new("Quantity", 0),
        Column::new(if taxes { "Excl. tax" } else { "Unit price" }, 0),
    ];
    if taxes {
        columns.push(Column::new("Incl. tax", 0));
    }
    let mut table = Table::new(columns).with_separator(&cfg.separator_char);

    let row = |name: String, quantity: f64| {
        let amounts = Amounts::compute(quantity, rate);
        let mut cells = vec![
            name,
            format_quantity(quantity),
            format_money(amounts.amount, currency),
        ];
        if taxes {
            cells.push(format_money(amounts.with_tax, currency));
        }
        cells
    };

    for line in &breakdown.lines {
        table.add_row(row(line.name.clone(), line.total_time));
    }
    table.add_row(row(
        format!("Total ({} days)", format_quantity(breakdown.total_time)),
        breakdown.total_time,
    ));

    let total = Amounts::compute(breakdown.total_time, rate);
    let mut out = table.render();
    out.push('\n');
    out.push_str(&format!(
        "Billed: {}\n",
        bold(&format_money(total.amount, currency))
    ));
    out.push_str(&format!(
        "Net: ~{}\n",
        format_money(total.net_estimate, currency)
    ));
    out
}
