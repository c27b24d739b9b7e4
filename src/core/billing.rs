//! Billing aggregator: folds the scopes of a month into one line per name.

use crate::models::DayRecord;
use crate::utils::collate;
use serde::Serialize;
use std::collections::HashMap;

/// Fixed VAT applied when taxes are enabled (20 %).
pub const TAX_MULTIPLIER: f64 = 1.2;
/// Share of the billed amount kept after social charges (22 % off).
pub const NET_RATIO: f64 = 0.78;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingLine {
    pub name: String,
    pub total_time: f64,
    /// Every activity line of every matching scope, in day order.
    pub content: Vec<String>,
    /// Number of days on which the scope appears.
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Breakdown {
    pub lines: Vec<BillingLine>,
    pub total_time: f64,
}

pub fn aggregate(days: &[DayRecord]) -> Breakdown {
    let mut lines: Vec<BillingLine> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for scope in days.iter().flat_map(|d| d.scopes.iter()) {
        match by_name.get(scope.name.as_str()) {
            Some(&i) => {
                let line = &mut lines[i];
                line.total_time += scope.time;
                line.content.extend(scope.content.iter().cloned());
                line.occurrences += 1;
            }
            None => {
                by_name.insert(scope.name.as_str(), lines.len());
                lines.push(BillingLine {
                    name: scope.name.clone(),
                    total_time: scope.time,
                    content: scope.content.clone(),
                    occurrences: 1,
                });
            }
        }
    }

    lines.sort_by(|a, b| collate::compare(&a.name, &b.name));

    let total_time = days.iter().map(DayRecord::total_time).sum();

    Breakdown { lines, total_time }
}

/// Money derived from a quantity of days and a daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Amounts {
    pub amount: f64,
    pub with_tax: f64,
    pub net_estimate: f64,
}

impl Amounts {
    pub fn compute(quantity: f64, rate: f64) -> Self {
        let amount = quantity * rate;
        Self {
            amount,
            with_tax: amount * TAX_MULTIPLIER,
            net_estimate: amount * NET_RATIO,
        }
    }
}
