use super::{audit, open_state, parse_day, report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, parse_quantity};
use crate::errors::AppResult;
use crate::utils::format_quantity;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Time { date, scope, value } = cmd {
        let d = parse_day(date)?;
        let quantity = parse_quantity(value);

        let mut state = open_state(cfg)?;
        let changed = state.update_days(|days| EditLogic::set_time(days, d, scope, quantity));

        let stored = state
            .days()
            .iter()
            .find(|r| r.date == d)
            .and_then(|r| r.scope(scope))
            .map(|s| format_quantity(s.time))
            .unwrap_or_default();

        if changed {
            audit(
                &state,
                "time",
                &d.to_string(),
                &format!("Scope '{scope}' set to {stored} day(s)"),
            );
        }
        report(
            &mut state,
            d,
            changed,
            &format!("'{scope}' set to {stored} day(s) on {d}."),
            cfg,
        );
    }

    Ok(())
}
